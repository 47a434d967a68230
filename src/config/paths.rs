//! Path management for studio-quote
//!
//! ## Path Resolution Order
//!
//! 1. `STUDIO_QUOTE_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/studio-quote` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::QuoteError;

/// Environment variable overriding the config directory
pub const DIR_ENV_VAR: &str = "STUDIO_QUOTE_DIR";

/// Manages all paths used by studio-quote
#[derive(Debug, Clone)]
pub struct QuotePaths {
    base_dir: PathBuf,
}

impl QuotePaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, QuoteError> {
        let base_dir = if let Ok(custom) = std::env::var(DIR_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "studio-quote")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    QuoteError::Config("Could not determine a config directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create QuotePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), QuoteError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| QuoteError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
