//! Project calculator
//!
//! A four-step wizard (direction, package, timeline and add-ons, contact
//! request) over a session-owned [`Selection`]. Transitions are linear and
//! every step is always complete, because each choice has a default.

pub mod selection;
pub mod session;
pub mod step;
pub mod submit;

pub use selection::{Selection, WizardEvent};
pub use session::{Calculator, SessionConfig};
pub use step::WizardStep;
pub use submit::{ContactFields, JsonLinesSubmitter, SubmissionRequest, Submitter};
