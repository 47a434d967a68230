//! Money formatting for display currencies

use crate::catalog::Catalog;
use crate::models::{group_digits, CurrencyId, Usd};

/// Format a USD amount in a display currency
///
/// Unknown currencies fall back to USD. The converted value is rounded to a
/// whole unit and printed as the currency symbol followed by the grouped
/// integer: `$2,800`, `€2,593`, `Kč63,636`.
pub fn format_money(catalog: &Catalog, amount: Usd, currency: &CurrencyId) -> String {
    let currency = catalog.currency_or_default(currency);
    let value = currency.convert(amount.as_f64()).round() as i64;

    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}{}", sign, currency.symbol, group_digits(value.unsigned_abs()))
}

/// Format a `min — max` range in a display currency
pub fn format_range(catalog: &Catalog, min: Usd, max: Usd, currency: &CurrencyId) -> String {
    format!(
        "{} — {}",
        format_money(catalog, min, currency),
        format_money(catalog, max, currency)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(amount: i64, currency: &str) -> String {
        format_money(&Catalog::builtin(), Usd::from_dollars(amount), &currency.into())
    }

    #[test]
    fn test_usd() {
        assert_eq!(fmt(2800, "USD"), "$2,800");
        assert_eq!(fmt(350, "USD"), "$350");
        assert_eq!(fmt(14700, "USD"), "$14,700");
    }

    #[test]
    fn test_eur() {
        // 2800 / 1.08 = 2592.59
        assert_eq!(fmt(2800, "EUR"), "€2,593");
    }

    #[test]
    fn test_czk() {
        // 2800 / 0.044 = 63636.36
        assert_eq!(fmt(2800, "CZK"), "Kč63,636");
    }

    #[test]
    fn test_unknown_currency_uses_usd() {
        assert_eq!(fmt(5975, "GBP"), "$5,975");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(fmt(-1200, "USD"), "-$1,200");
    }

    #[test]
    fn test_extreme_negative_amount() {
        assert_eq!(fmt(i64::MIN, "USD"), "-$9,223,372,036,854,775,808");
    }

    #[test]
    fn test_monotonic_per_currency() {
        let catalog = Catalog::builtin();
        for currency in catalog.currencies() {
            let mut previous = i64::MIN;
            for amount in (0..20_000).step_by(37) {
                let shown = format_money(&catalog, Usd::from_dollars(amount), &currency.id);
                let digits: String = shown.chars().filter(|c| c.is_ascii_digit()).collect();
                let value: i64 = digits.parse().unwrap();
                assert!(value >= previous, "{} not monotonic at {}", currency.id, amount);
                previous = value;
            }
        }
    }

    #[test]
    fn test_format_range() {
        let catalog = Catalog::builtin();
        let text = format_range(
            &catalog,
            Usd::from_dollars(350),
            Usd::from_dollars(5250),
            &"USD".into(),
        );
        assert_eq!(text, "$350 — $5,250");
    }
}
