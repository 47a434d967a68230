//! Custom error types for studio-quote
//!
//! The pricing core never fails: every catalog lookup degrades to a default.
//! These errors belong to the shell around it (settings files, output
//! serialization, terminal I/O and the terminal submission collaborator).

use thiserror::Error;

/// The main error type for studio-quote operations
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV export errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Contact fields rejected before hand-off
    #[error("Validation error: {0}")]
    Validation(String),

    /// Interactive terminal errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl QuoteError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for QuoteError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for QuoteError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for QuoteError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for studio-quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;
