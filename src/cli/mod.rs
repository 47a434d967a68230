//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the pricing core.

pub mod calculator;
pub mod catalog;
pub mod estimate;

pub use calculator::{parse_command, run_calculator, CalculatorCommand, CalculatorOutcome};
pub use catalog::{handle_catalog_command, CatalogCommands, ExportFormat};
pub use estimate::{handle_estimate_command, EstimateArgs};
