//! One-shot estimate command
//!
//! Computes a quote from command-line choices without walking the calculator.

use clap::Args;
use std::io::Write;

use crate::catalog::{Catalog, DEFAULT_PACKAGE, DEFAULT_TIMELINE};
use crate::config::settings::{OutputFormat, Settings};
use crate::display::{format_estimate_card, format_quote_details};
use crate::error::QuoteResult;
use crate::export::{write_quote_json, write_quote_yaml, QuoteDocument};
use crate::models::{AddonId, DirectionId, PackageId, TimelineId};
use crate::pricing::compute_quote;

/// Arguments for `quote estimate`
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Direction ID (defaults to the configured direction)
    #[arg(short, long)]
    pub direction: Option<String>,

    /// Package ID
    #[arg(short, long, default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Timeline ID
    #[arg(short, long, default_value = DEFAULT_TIMELINE)]
    pub timeline: String,

    /// Add-on ID (repeatable)
    #[arg(short, long = "addon")]
    pub addons: Vec<String>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show the line-by-line breakdown instead of the summary card
    #[arg(long)]
    pub details: bool,
}

/// Handle the estimate command
pub fn handle_estimate_command<W: Write>(
    catalog: &Catalog,
    settings: &Settings,
    args: EstimateArgs,
    out: &mut W,
) -> QuoteResult<()> {
    let direction = args
        .direction
        .map(DirectionId::new)
        .unwrap_or_else(|| settings.default_direction.clone());
    let package = PackageId::new(args.package);
    let timeline = TimelineId::new(args.timeline);
    let addons: Vec<AddonId> = args.addons.into_iter().map(AddonId::new).collect();

    for id in addons.iter().filter(|id| catalog.addon(id).is_none()) {
        tracing::warn!(addon = %id, "unknown add-on is not charged");
    }

    let quote = compute_quote(catalog, &direction, &package, &timeline, &addons);
    tracing::info!(
        direction = %quote.direction,
        package = %quote.package,
        total = quote.total.dollars(),
        "estimate computed"
    );

    let currency = &settings.currency;
    match args.format.unwrap_or(settings.output_format) {
        OutputFormat::Text if args.details => {
            write!(out, "{}", format_quote_details(catalog, &quote, currency))?
        }
        OutputFormat::Text => write!(out, "{}", format_estimate_card(catalog, &quote, currency))?,
        OutputFormat::Json => write_quote_json(&QuoteDocument::new(catalog, quote, currency), out)?,
        OutputFormat::Yaml => write_quote_yaml(&QuoteDocument::new(catalog, quote, currency), out)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(direction: &str, timeline: &str, addons: &[&str]) -> EstimateArgs {
        EstimateArgs {
            direction: Some(direction.to_string()),
            package: DEFAULT_PACKAGE.to_string(),
            timeline: timeline.to_string(),
            addons: addons.iter().map(|a| a.to_string()).collect(),
            format: None,
            details: false,
        }
    }

    fn run(args: EstimateArgs, settings: &Settings) -> String {
        let mut out = Vec::new();
        handle_estimate_command(&Catalog::builtin(), settings, args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_estimate() {
        let output = run(
            args("web-design", "rush", &["handoff", "support"]),
            &Settings::default(),
        );
        assert!(output.contains("$5,975"));
        assert!(output.contains("10–16 working days"));
    }

    #[test]
    fn test_direction_defaults_to_settings() {
        let settings = Settings {
            default_direction: "social".into(),
            ..Settings::default()
        };
        let mut a = args("", "standard", &[]);
        a.direction = None;
        let output = run(a, &settings);
        assert!(output.contains("Social media · Standard"));
        assert!(output.contains("$1,200"));
    }

    #[test]
    fn test_json_estimate() {
        let mut a = args("logo", "standard", &[]);
        a.format = Some(OutputFormat::Json);
        let output = run(a, &Settings::default());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["total"], 2800);
        assert_eq!(value["display_total"], "$2,800");
    }

    #[test]
    fn test_details() {
        let mut a = args("logo", "flex", &["assets"]);
        a.details = true;
        let output = run(a, &Settings::default());
        assert!(output.contains("Social templates pack"));
        assert!(output.contains("Total:      $2,869"));
    }
}
