//! Calculator step views
//!
//! Renders the options of the current step with 1-based numbers the
//! interactive calculator accepts as shortcuts.

use crate::pricing::{format_money, format_range};
use crate::wizard::{Calculator, WizardStep};

/// Contact fields asked for on the last step, in prompt order
pub const CONTACT_PROMPTS: [&str; 4] = [
    "Name",
    "Email",
    "Project link (optional)",
    "Short brief (goals, scope, deadline)",
];

/// Render the current step of a calculator
pub fn format_step(calc: &Calculator<'_>) -> String {
    let step = calc.step();
    let mut output = format!("{}  {}\n\n", step, step.title());

    match step {
        WizardStep::Direction => render_directions(calc, &mut output),
        WizardStep::Package => render_packages(calc, &mut output),
        WizardStep::TimelineAndAddons => render_timeline_and_addons(calc, &mut output),
        WizardStep::ContactRequest => render_contact(&mut output),
    }

    output
}

fn marker(selected: bool) -> &'static str {
    if selected {
        "*"
    } else {
        " "
    }
}

fn render_directions(calc: &Calculator<'_>, output: &mut String) {
    let catalog = calc.catalog();
    let selection = calc.selection();

    for (i, d) in catalog.wizard_directions().iter().enumerate() {
        let selected = d.id == selection.direction;
        output.push_str(&format!(
            " {} {}. {:<14} Indicative {}{}\n",
            marker(selected),
            i + 1,
            d.label,
            format_range(catalog, d.range.min, d.range.max, calc.currency()),
            if selected { "  [Selected]" } else { "" }
        ));
    }
}

fn render_packages(calc: &Calculator<'_>, output: &mut String) {
    let catalog = calc.catalog();
    let selection = calc.selection();
    let resolved = catalog.package_or_default(&selection.direction, &selection.package);

    for (i, p) in catalog.packages_for(&selection.direction).iter().enumerate() {
        output.push_str(&format!(
            " {} {}. {:<10} From {:<10} Timeline: {} days{}\n",
            marker(p.id == resolved.id),
            i + 1,
            p.label,
            format_money(catalog, p.base_price, calc.currency()),
            p.days,
            if p.popular { "  [Popular]" } else { "" }
        ));
    }
}

fn render_timeline_and_addons(calc: &Calculator<'_>, output: &mut String) {
    let catalog = calc.catalog();
    let selection = calc.selection();
    let resolved = catalog.timeline_or_default(&selection.timeline);

    for (i, t) in catalog.timelines().iter().enumerate() {
        output.push_str(&format!(
            " {} {}. {:<18} ×{:<5} {}\n",
            marker(t.id == resolved.id),
            i + 1,
            t.label,
            t.multiplier,
            t.hint
        ));
    }

    output.push_str("\nAdd-ons\n");
    for (i, a) in catalog.addons().iter().enumerate() {
        let checked = selection.has_addon(&a.id);
        let tag = if checked {
            "Added".to_string()
        } else {
            format_money(catalog, a.price, calc.currency())
        };
        output.push_str(&format!(
            " [{}] a{}. {:<24} {}\n",
            if checked { "x" } else { " " },
            i + 1,
            a.label,
            tag
        ));
    }
}

fn render_contact(output: &mut String) {
    output.push_str("Type 'submit' to send a proposal request. You will be asked for:\n");
    for prompt in CONTACT_PROMPTS {
        output.push_str(&format!("  - {}\n", prompt));
    }
}
