//! Export module for studio-quote
//!
//! Provides price list and quote output in multiple formats:
//! - CSV: the price list, spreadsheet-compatible
//! - JSON: catalog snapshots and quote documents
//! - YAML: human-readable variants of the JSON documents

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_price_list_csv;
pub use json::{
    export_catalog_json, write_quote_json, CatalogExport, DirectionPackages, QuoteDocument,
    EXPORT_SCHEMA_VERSION,
};
pub use yaml::{export_catalog_yaml, write_quote_yaml};
