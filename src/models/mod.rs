//! Core data models for studio-quote
//!
//! This module contains the catalog entities (directions, packages,
//! timelines, add-ons, currencies), their ids and the USD amount type.

pub mod addon;
pub mod currency;
pub mod direction;
pub mod ids;
pub mod money;
pub mod package;
pub mod timeline;

pub use addon::Addon;
pub use currency::Currency;
pub use direction::{Direction, PriceRange};
pub use ids::{AddonId, CurrencyId, DirectionId, PackageId, TimelineId};
pub use money::{group_digits, Usd};
pub use package::{DayRange, Package};
pub use timeline::Timeline;
