//! Display formatting for terminal output
//!
//! Renders catalog tables, estimates and calculator steps as plain text.

pub mod catalog;
pub mod estimate;
pub mod wizard;

pub use catalog::{
    format_addon_list, format_package_list, format_pricing_overview, format_starting_points,
    format_timeline_list,
};
pub use estimate::{format_estimate_card, format_quote_details};
pub use wizard::{format_step, CONTACT_PROMPTS};
