//! Delivery timelines

use serde::{Deserialize, Serialize};

use super::ids::TimelineId;

/// A delivery-speed modifier applied to both price and duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub id: TimelineId,
    pub label: String,
    pub multiplier: f64,
    pub hint: String,
}

impl Timeline {
    pub fn new(id: &str, label: &str, multiplier: f64, hint: &str) -> Self {
        Self {
            id: TimelineId::new(id),
            label: label.to_string(),
            multiplier,
            hint: hint.to_string(),
        }
    }
}
