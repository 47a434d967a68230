//! YAML export functionality
//!
//! Human-readable variants of the JSON documents.

use std::io::Write;

use crate::catalog::Catalog;
use crate::error::QuoteResult;
use crate::export::json::{CatalogExport, QuoteDocument};

/// Export the catalog to YAML
pub fn export_catalog_yaml<W: Write>(catalog: &Catalog, writer: &mut W) -> QuoteResult<()> {
    let export = CatalogExport::from_catalog(catalog);

    writeln!(writer, "# studio-quote price list")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export)?;
    Ok(())
}

/// Write a quote document as YAML
pub fn write_quote_yaml<W: Write>(document: &QuoteDocument, writer: &mut W) -> QuoteResult<()> {
    serde_yaml::to_writer(writer, document)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddonId;
    use crate::pricing::compute_quote;

    #[test]
    fn test_catalog_yaml_has_header() {
        let mut buffer = Vec::new();
        export_catalog_yaml(&Catalog::builtin(), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("# studio-quote price list"));
        assert!(output.contains("web-design"));

        let parsed: CatalogExport = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed.timelines.len(), 3);
    }

    #[test]
    fn test_quote_yaml() {
        let catalog = Catalog::builtin();
        let quote = compute_quote(
            &catalog,
            &"ui-kit".into(),
            &"pro".into(),
            &"standard".into(),
            &Vec::<AddonId>::new(),
        );
        let document = QuoteDocument::new(&catalog, quote, &"USD".into());

        let mut buffer = Vec::new();
        write_quote_yaml(&document, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("total: 4900"));
        assert!(output.contains("package: pro"));
    }
}
