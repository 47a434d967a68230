//! CSV price list export
//!
//! One row per (direction, package) pair, with the USD base price and the
//! price in the requested display currency.

use serde::Serialize;
use std::io::Write;

use crate::catalog::Catalog;
use crate::error::QuoteResult;
use crate::models::CurrencyId;
use crate::pricing::format_money;

#[derive(Serialize)]
struct PriceListRow<'a> {
    direction_id: &'a str,
    direction: &'a str,
    package_id: &'a str,
    package: &'a str,
    base_usd: i64,
    price: String,
    days_min: u32,
    days_max: u32,
    popular: bool,
}

/// Export the full price list to CSV
pub fn export_price_list_csv<W: Write>(
    catalog: &Catalog,
    currency: &CurrencyId,
    writer: W,
) -> QuoteResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for direction in catalog.directions() {
        for package in catalog.packages_for(&direction.id) {
            csv_writer.serialize(PriceListRow {
                direction_id: direction.id.as_str(),
                direction: &direction.label,
                package_id: package.id.as_str(),
                package: &package.label,
                base_usd: package.base_price.dollars(),
                price: format_money(catalog, package.base_price, currency),
                days_min: package.days.min,
                days_max: package.days.max,
                popular: package.popular,
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_list_rows() {
        let catalog = Catalog::builtin();
        let mut buffer = Vec::new();
        export_price_list_csv(&catalog, &"USD".into(), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[0],
            "direction_id,direction,package_id,package,base_usd,price,days_min,days_max,popular"
        );
        // header + 8 directions * 3 tiers
        assert_eq!(lines.len(), 25);
        assert_eq!(lines[2], "logo,Logo,standard,Standard,2800,\"$2,800\",7,12,true");
    }

    #[test]
    fn test_price_list_quotes_labels_with_commas() {
        let catalog = Catalog::builtin();
        let mut buffer = Vec::new();
        export_price_list_csv(&catalog, &"CZK".into(), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("logo-guide,Logo & guide,essential"));
        assert!(output.contains("\"Kč63,636\""));
    }
}
