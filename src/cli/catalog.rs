//! Catalog CLI commands
//!
//! Browse the price list and export it.

use clap::{Subcommand, ValueEnum};
use std::io::Write;

use crate::catalog::Catalog;
use crate::config::settings::Settings;
use crate::display::{
    format_addon_list, format_package_list, format_pricing_overview, format_starting_points,
    format_timeline_list,
};
use crate::error::QuoteResult;
use crate::export::{export_catalog_json, export_catalog_yaml, export_price_list_csv};
use crate::models::DirectionId;

/// Price list export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

/// Catalog subcommands
#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Pricing overview of every direction
    #[command(alias = "ls")]
    Directions,

    /// Package tiers of a direction
    Packages {
        /// Direction ID (e.g., "web-design")
        direction: String,
    },

    /// Delivery timelines and their multipliers
    Timelines,

    /// Optional add-ons
    Addons,

    /// Typical starting points
    Popular,

    /// Export the full price list
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },
}

/// Handle a catalog command
pub fn handle_catalog_command<W: Write>(
    catalog: &Catalog,
    settings: &Settings,
    cmd: CatalogCommands,
    out: &mut W,
) -> QuoteResult<()> {
    let currency = &settings.currency;

    match cmd {
        CatalogCommands::Directions => {
            writeln!(out, "{}", format_pricing_overview(catalog, currency))?;
        }
        CatalogCommands::Packages { direction } => {
            let direction = DirectionId::new(direction);
            if catalog.direction(&direction).is_none() {
                tracing::warn!(%direction, "unknown direction, showing default");
            }
            writeln!(out, "{}", format_package_list(catalog, &direction, currency))?;
        }
        CatalogCommands::Timelines => {
            writeln!(out, "{}", format_timeline_list(catalog))?;
        }
        CatalogCommands::Addons => {
            writeln!(out, "{}", format_addon_list(catalog, currency))?;
        }
        CatalogCommands::Popular => {
            write!(out, "{}", format_starting_points(catalog, currency))?;
        }
        CatalogCommands::Export { format } => match format {
            ExportFormat::Csv => export_price_list_csv(catalog, currency, &mut *out)?,
            ExportFormat::Json => export_catalog_json(catalog, out)?,
            ExportFormat::Yaml => export_catalog_yaml(catalog, out)?,
        },
    }

    Ok(())
}
