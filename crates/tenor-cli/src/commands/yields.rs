//! Yield command implementation.
//!
//! Solves the flat continuously-compounded rate that reprices each
//! instrument. Needs no curve.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::warn;

use tenor_analytics::cashflows::Instrument;
use tenor_analytics::valuation::yield_rate_with;

use crate::cli::OutputFormat;
use crate::commands::InputArgs;
use crate::output::{format_error, format_rate, format_value, print_output};

/// Arguments for the yield command.
#[derive(Args, Debug)]
pub struct YieldArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Initial guess for the solver (decimal, e.g. 0.05 for 5%)
    #[arg(short, long, default_value = "0.05")]
    pub guess: f64,
}

/// Yield of one instrument.
#[derive(Debug, Serialize, Tabled)]
pub struct YieldRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Maturity", display_with = "format_value")]
    pub maturity: f64,
    #[tabled(rename = "Price", display_with = "format_value")]
    pub price: f64,
    #[tabled(rename = "Yield", display_with = "format_rate")]
    pub yield_rate: f64,
    #[tabled(rename = "Iterations")]
    pub iterations: u32,
    #[tabled(rename = "Residual", display_with = "format_error")]
    pub residual: f64,
}

/// Execute the yield command.
pub fn execute(args: YieldArgs, format: OutputFormat) -> Result<()> {
    let input = args.input.load()?;
    let solver = input.config.solver;

    let rows: Vec<YieldRow> = input
        .instruments
        .iter()
        .enumerate()
        .map(|(index, instrument)| {
            let flows = &instrument.cash_flows;
            let result = yield_rate_with(flows, instrument.price, args.guess, &solver);
            if !result.is_converged() {
                warn!("yield for instrument {index} did not converge");
            }
            YieldRow {
                index,
                maturity: flows.maturity().unwrap_or(f64::NAN),
                price: instrument.price,
                yield_rate: result.root,
                iterations: result.iterations,
                residual: result.residual,
            }
        })
        .collect();

    print_output(&rows, format)
}
