//! Package tiers
//!
//! Each direction offers a small set of packages (Essential, Standard, Pro)
//! with a base price and a delivery window in working days.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PackageId;
use super::money::Usd;

/// Delivery window in working days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    pub min: u32,
    pub max: u32,
}

impl DayRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Divide both bounds by a timeline multiplier, rounding each
    ///
    /// A multiplier above 1 compresses the schedule.
    pub fn compress(&self, multiplier: f64) -> Self {
        Self {
            min: (self.min as f64 / multiplier).round() as u32,
            max: (self.max as f64 / multiplier).round() as u32,
        }
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.min, self.max)
    }
}

/// A pricing tier within a direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: PackageId,
    pub label: String,
    pub base_price: Usd,
    pub days: DayRange,

    #[serde(default)]
    pub popular: bool,
}

impl Package {
    pub fn new(id: &str, label: &str, base_price: i64, days: DayRange) -> Self {
        Self {
            id: PackageId::new(id),
            label: label.to_string(),
            base_price: Usd::from_dollars(base_price),
            days,
            popular: false,
        }
    }

    /// Mark this package as the popular tier
    pub fn popular(mut self) -> Self {
        self.popular = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_rush() {
        let days = DayRange::new(12, 20).compress(1.25);
        assert_eq!(days, DayRange::new(10, 16));
    }

    #[test]
    fn test_compress_flex_lengthens() {
        let days = DayRange::new(7, 12).compress(0.95);
        assert_eq!(days, DayRange::new(7, 13));
    }

    #[test]
    fn test_compress_identity() {
        let days = DayRange::new(3, 5).compress(1.0);
        assert_eq!(days, DayRange::new(3, 5));
    }

    #[test]
    fn test_day_range_display() {
        assert_eq!(DayRange::new(7, 12).to_string(), "7–12");
    }

    #[test]
    fn test_popular_builder() {
        let p = Package::new("standard", "Standard", 2800, DayRange::new(7, 12)).popular();
        assert!(p.popular);
        assert!(!Package::new("pro", "Pro", 5250, DayRange::new(12, 18)).popular);
    }
}
