//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{BootstrapArgs, OasArgs, PriceArgs, YieldArgs};

/// Tenor - forward curve bootstrapping and valuation
#[derive(Parser)]
#[command(name = "tenor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Bootstrap a piecewise-flat forward curve from priced instruments
    Bootstrap(BootstrapArgs),

    /// Present value, duration and convexity of each instrument
    Price(PriceArgs),

    /// Flat continuously-compounded yield of each instrument
    Yield(YieldArgs),

    /// Spread over the curve that reprices each instrument
    Oas(OasArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}
