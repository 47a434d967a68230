//! Configuration module for studio-quote
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::QuotePaths;
pub use settings::{OutputFormat, Settings};
