//! Estimate display formatting

use crate::catalog::Catalog;
use crate::models::CurrencyId;
use crate::pricing::{format_money, Quote};

/// Deliverables every project includes
pub const INCLUDES: [&str; 3] = ["Scope alignment", "Design + delivery files", "Clean handoff"];

/// The calculator's estimate card
pub fn format_estimate_card(catalog: &Catalog, quote: &Quote, currency: &CurrencyId) -> String {
    let direction = catalog.direction_or_default(&quote.direction);
    let package = catalog.package_or_default(&quote.direction, &quote.package);
    let shown_currency = &catalog.currency_or_default(currency).id;

    let mut output = String::new();
    output.push_str(&format!("Estimate{:>32}\n", shown_currency));
    output.push_str(&format!("{} · {}\n", direction.label, package.label));
    output.push_str(&format!("{}\n", format_money(catalog, quote.total, currency)));
    output.push_str(&format!("Timeline: {} working days\n", quote.days));
    output.push_str("\nIncludes\n");
    for item in INCLUDES {
        output.push_str(&format!("  ✓ {}\n", item));
    }
    output
}

/// Line-by-line breakdown of a quote
pub fn format_quote_details(catalog: &Catalog, quote: &Quote, currency: &CurrencyId) -> String {
    let direction = catalog.direction_or_default(&quote.direction);
    let package = catalog.package_or_default(&quote.direction, &quote.package);
    let timeline = catalog.timeline_or_default(&quote.timeline);
    let money = |amount| format_money(catalog, amount, currency);

    let mut output = String::new();
    output.push_str(&format!("Direction:  {}\n", direction.label));
    output.push_str(&format!(
        "Package:    {} ({})\n",
        package.label,
        money(quote.base_price)
    ));

    if quote.addons.is_empty() {
        output.push_str("Add-ons:    none\n");
    } else {
        output.push_str("Add-ons:\n");
        for id in &quote.addons {
            match catalog.addon(id) {
                Some(addon) => {
                    output.push_str(&format!("  {:<24} {}\n", addon.label, money(addon.price)))
                }
                None => output.push_str(&format!("  {:<24} (unknown, not charged)\n", id)),
            }
        }
    }

    output.push_str(&format!(
        "Timeline:   {} (×{})\n",
        timeline.label, quote.multiplier
    ));
    output.push_str(&format!("{}\n", "-".repeat(40)));
    output.push_str(&format!("Total:      {}\n", money(quote.total)));
    output.push_str(&format!("Delivery:   {} working days\n", quote.days));
    output
}
