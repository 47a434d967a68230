//! Pricing: quote calculation and currency display
//!
//! Both halves are pure functions over the [`Catalog`](crate::catalog::Catalog).

pub mod format;
pub mod quote;

pub use format::{format_money, format_range};
pub use quote::{compute_quote, price, Quote};
