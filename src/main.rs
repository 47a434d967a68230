use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use studio_quote::catalog::Catalog;
use studio_quote::cli::{
    handle_catalog_command, handle_estimate_command, run_calculator, CalculatorOutcome,
    CatalogCommands, EstimateArgs,
};
use studio_quote::config::{paths::QuotePaths, settings::Settings};
use studio_quote::logging::init_cli_logger;
use studio_quote::models::{CurrencyId, DirectionId};
use studio_quote::wizard::{JsonLinesSubmitter, SessionConfig};

#[derive(Parser)]
#[command(
    name = "quote",
    author = "Kaylee Beyene",
    version,
    about = "Pricing calculator and project quote wizard for a design studio",
    long_about = "studio-quote computes indicative project estimates from the studio's \
                  price list: pick a direction, a package, a timeline and add-ons, and \
                  get a total in USD, EUR or CZK with the expected delivery window."
)]
struct Cli {
    /// Display currency (USD, EUR, CZK)
    #[arg(short, long, global = true, env = "STUDIO_QUOTE_CURRENCY")]
    currency: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and export the price list
    #[command(subcommand)]
    Catalog(CatalogCommands),

    /// Compute an estimate from explicit choices
    Estimate(EstimateArgs),

    /// Walk through the interactive project calculator
    #[command(alias = "calc")]
    Calculator {
        /// Direction to start on (defaults to the configured direction)
        #[arg(short, long)]
        direction: Option<String>,
    },

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let paths = QuotePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(currency) = cli.currency {
        settings.currency = CurrencyId::new(currency.to_uppercase());
    }

    let catalog = Catalog::builtin();
    let mut stdout = io::stdout();

    match cli.command {
        Some(Commands::Catalog(cmd)) => {
            tracing::info!("catalog command");
            handle_catalog_command(&catalog, &settings, cmd, &mut stdout)?;
        }
        Some(Commands::Estimate(args)) => {
            tracing::info!("estimate command");
            handle_estimate_command(&catalog, &settings, args, &mut stdout)?;
        }
        Some(Commands::Calculator { direction }) => {
            tracing::info!("calculator command");
            let config = SessionConfig {
                initial_direction: direction
                    .map(DirectionId::new)
                    .unwrap_or_else(|| settings.default_direction.clone()),
                currency: settings.currency.clone(),
            };
            let mut submitter = JsonLinesSubmitter::new(io::stdout());
            let outcome = run_calculator(
                &catalog,
                config,
                io::stdin().lock(),
                &mut stdout,
                &mut submitter,
            )?;
            if let CalculatorOutcome::Closed = outcome {
                println!();
                println!("Calculator closed.");
            }
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Settings already exist at: {}", paths.settings_file().display());
            } else {
                Settings::default().save(&paths)?;
                println!("Wrote default settings to: {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            println!("studio-quote Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency:          {}", settings.currency);
            println!("  Default direction: {}", settings.default_direction);
            println!("  Output format:     {:?}", settings.output_format);
        }
        None => {
            println!("studio-quote - Design project pricing calculator");
            println!();
            println!("Run 'quote --help' for usage information.");
            println!("Run 'quote calculator' to build an estimate step by step.");
        }
    }

    Ok(())
}
