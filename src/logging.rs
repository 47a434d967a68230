//! Diagnostic logging setup
//!
//! Events go to stderr so that quote and export output on stdout stays clean.
//! `RUST_LOG` takes precedence over the verbosity flag.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber for the CLI
pub fn init_cli_logger(verbose: bool) {
    let default_directive = if verbose {
        "studio_quote=debug,quote=debug"
    } else {
        "studio_quote=warn,quote=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Keep an already-installed subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
