//! USD amount type
//!
//! Catalog prices and quote totals are whole US dollars, so amounts are stored
//! as an i64 count of dollars. Conversion to other display currencies happens
//! in [`crate::pricing::format_money`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A whole-dollar amount denominated in USD
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Usd(i64);

impl Usd {
    /// Create an amount from whole dollars
    ///
    /// # Examples
    /// ```
    /// use studio_quote::models::Usd;
    /// let amount = Usd::from_dollars(2800);
    /// assert_eq!(amount.dollars(), 2800);
    /// ```
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole dollars
    pub const fn dollars(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiply by a factor and round to the nearest dollar
    ///
    /// Halves round away from zero.
    pub fn scale(&self, factor: f64) -> Self {
        Self((self.0 as f64 * factor).round() as i64)
    }

    /// The amount as a float, for currency conversion
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

/// Group the digits of a magnitude in threes with comma separators
///
/// `1234567` becomes `"1,234,567"`. Callers place their own sign.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

impl Default for Usd {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${}", sign, group_digits(self.0.unsigned_abs()))
    }
}

impl Add for Usd {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::iter::Sum for Usd {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Usd::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Usd> for Usd {
    fn sum<I: Iterator<Item = &'a Usd>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
