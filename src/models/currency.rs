//! Display currencies
//!
//! Prices are authored in USD; a currency only describes how to convert and
//! label an amount for display.

use serde::{Deserialize, Serialize};

use super::ids::CurrencyId;

/// A display currency with its conversion rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub id: CurrencyId,

    /// Prefix printed before the amount ("$", "€", "Kč")
    pub symbol: String,

    /// Value of one unit of this currency in USD; USD amounts are divided by it
    pub rate_to_usd: f64,
}

impl Currency {
    pub fn new(id: &str, symbol: &str, rate_to_usd: f64) -> Self {
        Self {
            id: CurrencyId::new(id),
            symbol: symbol.to_string(),
            rate_to_usd,
        }
    }

    /// Convert a USD value into this currency, unrounded
    pub fn convert(&self, usd: f64) -> f64 {
        usd / self.rate_to_usd
    }
}
