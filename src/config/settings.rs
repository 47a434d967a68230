//! User settings for studio-quote
//!
//! Holds the default display currency, the direction the calculator opens on
//! and the preferred output format. Nothing here is written during a
//! calculator session.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::paths::QuotePaths;
use crate::error::QuoteError;
use crate::models::{CurrencyId, DirectionId};

/// Output format for quotes and catalog exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    Json,
    Yaml,
}

/// User settings for studio-quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Display currency id (USD, EUR, CZK)
    #[serde(default = "default_currency")]
    pub currency: CurrencyId,

    /// Direction the calculator opens on
    #[serde(default = "default_direction")]
    pub default_direction: DirectionId,

    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> CurrencyId {
    CurrencyId::new("USD")
}

fn default_direction() -> DirectionId {
    DirectionId::new("logo")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: default_currency(),
            default_direction: default_direction(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &QuotePaths) -> Result<Self, QuoteError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| QuoteError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                QuoteError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &QuotePaths) -> Result<(), QuoteError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| QuoteError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| QuoteError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
