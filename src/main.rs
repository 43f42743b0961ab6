//! Nodestrap - node container startup lifecycle controller
//!
//! Entry point wiring: logging, configuration resolution, then the
//! bootstrap-or-start lifecycle.

use std::process;

use clap::Parser;
use eyre::Result;
use tracing::{error, info};

use nodestrap::cli::Cli;
use nodestrap::config::Config;
use nodestrap::lifecycle;

fn setup_logging(verbose: bool) -> Result<()> {
    // Entrypoint logs go to stderr; stdout carries the node's own output
    // after handoff.
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to setup logging: {e}"))?;

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose)?;

    // Resolved once; no ambient environment reads past this point.
    let config = Config::from_env();

    println!("nodestrap {}", env!("CARGO_PKG_VERSION"));
    println!("  data directory:     {}", config.data_dir.display());
    println!("  accounts directory: {}", config.accounts_dir.display());
    println!("  rpc url:            {}", config.rpc_url);
    info!(bin = %config.node_bin.display(), "resolved configuration");

    match lifecycle::run(&config, &cli.node_args) {
        // A successful start never returns: the node process replaced us.
        Ok(never) => match never {},
        Err(e) => {
            error!(error = %e, "startup failed");
            eprintln!("nodestrap: {e}");
            process::exit(e.exit_code());
        }
    }
}
