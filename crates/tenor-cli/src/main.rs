//! Tenor CLI - bootstrap forward curves and value instruments against them.
//!
//! # Usage
//!
//! ```bash
//! # Bootstrap a curve from priced instruments
//! tenor bootstrap --input market.toml
//!
//! # Present value, duration and convexity on the bootstrapped curve
//! tenor price --input market.toml
//!
//! # Flat yields and spreads, as JSON
//! tenor --format json yield --input market.toml
//! tenor oas --input bonds.json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod input;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let format = cli.format;

    match cli.command {
        Commands::Bootstrap(args) => commands::bootstrap::execute(args, format)?,
        Commands::Price(args) => commands::price::execute(args, format)?,
        Commands::Yield(args) => commands::yields::execute(args, format)?,
        Commands::Oas(args) => commands::oas::execute(args, format)?,
    }

    Ok(())
}

/// Routes `log` and `tracing` records to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
