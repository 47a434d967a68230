//! studio-quote - Pricing calculator for a design studio
//!
//! This library provides the pricing core behind the studio's project
//! calculator: a static price catalog, currency display, quote computation
//! and the four-step selection wizard that collects a proposal request.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Catalog entities, slug ids and the USD amount type
//! - `catalog`: The built-in price list with defaulting lookups
//! - `pricing`: Quote calculation and money formatting
//! - `wizard`: Calculator session, selection state machine, submission seam
//! - `config`: Config directory and user settings
//! - `display`: Plain-text rendering for the terminal
//! - `export`: CSV, JSON and YAML output
//! - `cli`: Command handlers for the `quote` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use studio_quote::catalog::Catalog;
//! use studio_quote::wizard::{Calculator, SessionConfig, WizardEvent};
//!
//! let catalog = Catalog::builtin();
//! let mut calc = Calculator::open(
//!     &catalog,
//!     SessionConfig {
//!         initial_direction: "web-design".into(),
//!         currency: "USD".into(),
//!     },
//! );
//! calc.apply(WizardEvent::SelectTimeline("rush".into()));
//! calc.apply(WizardEvent::ToggleAddon("handoff".into()));
//! calc.apply(WizardEvent::ToggleAddon("support".into()));
//!
//! assert_eq!(calc.quote().total.dollars(), 5975);
//! assert_eq!(calc.formatted_total(), "$5,975");
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod pricing;
pub mod wizard;

pub use error::{QuoteError, QuoteResult};
