//! JSON export functionality
//!
//! Machine-readable catalog snapshots and quote documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::catalog::Catalog;
use crate::error::QuoteResult;
use crate::models::{Addon, Currency, CurrencyId, Direction, DirectionId, Package, Timeline};
use crate::pricing::{format_money, Quote};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Package tiers of one direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionPackages {
    pub direction: DirectionId,
    pub packages: Vec<Package>,
}

/// Full catalog snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub directions: Vec<Direction>,
    pub packages: Vec<DirectionPackages>,
    pub timelines: Vec<Timeline>,
    pub addons: Vec<Addon>,
    pub currencies: Vec<Currency>,
}

impl CatalogExport {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let packages = catalog
            .directions()
            .iter()
            .map(|d| DirectionPackages {
                direction: d.id.clone(),
                packages: catalog.packages_for(&d.id).to_vec(),
            })
            .collect();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            directions: catalog.directions().to_vec(),
            packages,
            timelines: catalog.timelines().to_vec(),
            addons: catalog.addons().to_vec(),
            currencies: catalog.currencies().to_vec(),
        }
    }
}

/// A quote together with its rendering in a display currency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteDocument {
    #[serde(flatten)]
    pub quote: Quote,

    pub currency: CurrencyId,

    /// Total rendered in `currency`
    pub display_total: String,
}

impl QuoteDocument {
    pub fn new(catalog: &Catalog, quote: Quote, currency: &CurrencyId) -> Self {
        let currency = catalog.currency_or_default(currency).id.clone();
        let display_total = format_money(catalog, quote.total, &currency);
        Self {
            quote,
            currency,
            display_total,
        }
    }
}

/// Export the catalog as pretty JSON
pub fn export_catalog_json<W: Write>(catalog: &Catalog, writer: &mut W) -> QuoteResult<()> {
    let export = CatalogExport::from_catalog(catalog);
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;
    Ok(())
}

/// Write a quote document as pretty JSON
pub fn write_quote_json<W: Write>(document: &QuoteDocument, writer: &mut W) -> QuoteResult<()> {
    serde_json::to_writer_pretty(&mut *writer, document)?;
    writeln!(writer)?;
    Ok(())
}
