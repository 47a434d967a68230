//! Optional flat-fee extras

use serde::{Deserialize, Serialize};

use super::ids::AddonId;
use super::money::Usd;

/// An independently selectable extra service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addon {
    pub id: AddonId,
    pub label: String,
    pub price: Usd,
}

impl Addon {
    pub fn new(id: &str, label: &str, price: i64) -> Self {
        Self {
            id: AddonId::new(id),
            label: label.to_string(),
            price: Usd::from_dollars(price),
        }
    }
}
