//! Service directions
//!
//! A direction is a category of design work (logo, web design, ...) with an
//! indicative price range shown on the pricing overview.

use serde::{Deserialize, Serialize};

use super::ids::DirectionId;
use super::money::Usd;

/// Indicative price range for a direction, in USD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Usd,
    pub max: Usd,
}

impl PriceRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self {
            min: Usd::from_dollars(min),
            max: Usd::from_dollars(max),
        }
    }

    /// Check whether an amount falls inside the range (inclusive)
    pub fn contains(&self, amount: Usd) -> bool {
        amount >= self.min && amount <= self.max
    }
}

/// A category of design service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    pub id: DirectionId,
    pub label: String,

    /// Number of deliverable items in the direction
    pub items: u32,

    /// Indicative range across all packages
    pub range: PriceRange,

    /// Typical price of the popular (standard) package
    pub popular_price: Usd,
}

impl Direction {
    pub fn new(id: &str, label: &str, items: u32, range: PriceRange, popular_price: i64) -> Self {
        Self {
            id: DirectionId::new(id),
            label: label.to_string(),
            items,
            range,
            popular_price: Usd::from_dollars(popular_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_contains() {
        let range = PriceRange::new(350, 5250);
        assert!(range.contains(Usd::from_dollars(350)));
        assert!(range.contains(Usd::from_dollars(5250)));
        assert!(!range.contains(Usd::from_dollars(5251)));
    }

    #[test]
    fn test_direction_new() {
        let d = Direction::new("logo", "Logo", 4, PriceRange::new(350, 5250), 2800);
        assert_eq!(d.id, "logo");
        assert_eq!(d.popular_price.dollars(), 2800);
    }
}
