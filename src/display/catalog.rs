//! Catalog display formatting
//!
//! Price-list tables for terminal output. All prices are rendered in the
//! requested display currency.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::catalog::Catalog;
use crate::models::{CurrencyId, DirectionId};
use crate::pricing::{format_money, format_range};

#[derive(Tabled)]
struct DirectionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Direction")]
    label: String,
    #[tabled(rename = "Items")]
    items: u32,
    #[tabled(rename = "Indicative")]
    indicative: String,
    #[tabled(rename = "Popular")]
    popular: String,
}

#[derive(Tabled)]
struct PackageRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Package")]
    label: String,
    #[tabled(rename = "From")]
    price: String,
    #[tabled(rename = "Timeline")]
    days: String,
    #[tabled(rename = "")]
    tag: &'static str,
}

#[derive(Tabled)]
struct TimelineRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Timeline")]
    label: String,
    #[tabled(rename = "Multiplier")]
    multiplier: String,
    #[tabled(rename = "Hint")]
    hint: String,
}

#[derive(Tabled)]
struct AddonRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Add-on")]
    label: String,
    #[tabled(rename = "Price")]
    price: String,
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Pricing overview: every direction with its indicative range
pub fn format_pricing_overview(catalog: &Catalog, currency: &CurrencyId) -> String {
    let rows = catalog
        .directions()
        .iter()
        .map(|d| DirectionRow {
            id: d.id.to_string(),
            label: d.label.clone(),
            items: d.items,
            indicative: format_range(catalog, d.range.min, d.range.max, currency),
            popular: format_money(catalog, d.popular_price, currency),
        })
        .collect();

    let mut output = render(rows);
    output.push_str("\n\nFinal quote depends on scope and timeline.");
    output
}

/// Package tiers of one direction
pub fn format_package_list(catalog: &Catalog, direction: &DirectionId, currency: &CurrencyId) -> String {
    let resolved = catalog.direction_or_default(direction);
    let rows = catalog
        .packages_for(direction)
        .iter()
        .map(|p| PackageRow {
            id: p.id.to_string(),
            label: p.label.clone(),
            price: format_money(catalog, p.base_price, currency),
            days: format!("{} days", p.days),
            tag: if p.popular { "Popular" } else { "" },
        })
        .collect();

    format!("{}\n\n{}", resolved.label, render(rows))
}

pub fn format_timeline_list(catalog: &Catalog) -> String {
    let rows = catalog
        .timelines()
        .iter()
        .map(|t| TimelineRow {
            id: t.id.to_string(),
            label: t.label.clone(),
            multiplier: format!("×{}", t.multiplier),
            hint: t.hint.clone(),
        })
        .collect();

    render(rows)
}

pub fn format_addon_list(catalog: &Catalog, currency: &CurrencyId) -> String {
    let rows = catalog
        .addons()
        .iter()
        .map(|a| AddonRow {
            id: a.id.to_string(),
            label: a.label.clone(),
            price: format_money(catalog, a.price, currency),
        })
        .collect();

    render(rows)
}

/// Typical starting points with their standard-package price
pub fn format_starting_points(catalog: &Catalog, currency: &CurrencyId) -> String {
    let mut output = String::from("Typical starting points\n");
    for direction in catalog.starting_points() {
        output.push_str(&format!(
            "  {:<14} {:>10}  Standard package\n",
            direction.label,
            format_money(catalog, direction.popular_price, currency)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_overview_lists_all_directions() {
        let catalog = Catalog::builtin();
        let output = format_pricing_overview(&catalog, &"USD".into());
        for direction in catalog.directions() {
            assert!(output.contains(&direction.label), "missing {}", direction.label);
        }
        assert!(output.contains("$350 — $5,250"));
    }

    #[test]
    fn test_package_list_marks_popular() {
        let catalog = Catalog::builtin();
        let output = format_package_list(&catalog, &"ui-kit".into(), &"USD".into());
        assert!(output.starts_with("UI kit"));
        assert!(output.contains("$4,900"));
        assert!(output.contains("12–18 days"));
        assert_eq!(output.matches("Popular").count(), 1);
    }

    #[test]
    fn test_timeline_list() {
        let output = format_timeline_list(&Catalog::builtin());
        assert!(output.contains("×1.25"));
        assert!(output.contains("More flexibility on dates"));
    }

    #[test]
    fn test_addon_list_in_eur() {
        let output = format_addon_list(&Catalog::builtin(), &"EUR".into());
        // 400 / 1.08 = 370.37
        assert!(output.contains("€370"));
    }

    #[test]
    fn test_starting_points() {
        let output = format_starting_points(&Catalog::builtin(), &"USD".into());
        assert!(output.contains("Logo"));
        assert!(output.contains("$2,800"));
        assert!(output.contains("Web design"));
        assert!(output.contains("UI kit"));
        assert!(!output.contains("Brand book"));
    }
}
