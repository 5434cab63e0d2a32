//! OAS command implementation.
//!
//! Solves the constant spread over the curve that reprices each
//! instrument. The curve is the one in the input file, or the one
//! bootstrapped from its instruments.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::warn;

use tenor_analytics::cashflows::Instrument;
use tenor_analytics::valuation::oas_with;
use tenor_math::solvers::Domain;

use crate::cli::OutputFormat;
use crate::commands::InputArgs;
use crate::output::{format_error, format_value, print_output};

/// Arguments for the oas command.
#[derive(Args, Debug)]
pub struct OasArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Initial spread for the solver (decimal)
    #[arg(short, long, default_value = "0.0", allow_negative_numbers = true)]
    pub guess: f64,
}

/// Spread of one instrument.
#[derive(Debug, Serialize, Tabled)]
pub struct OasRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Maturity", display_with = "format_value")]
    pub maturity: f64,
    #[tabled(rename = "Price", display_with = "format_value")]
    pub price: f64,
    #[tabled(rename = "OAS (bps)", display_with = "format_bps")]
    pub spread: f64,
    #[tabled(rename = "Iterations")]
    pub iterations: u32,
    #[tabled(rename = "Residual", display_with = "format_error")]
    pub residual: f64,
}

fn format_bps(spread: &f64) -> String {
    if spread.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.4}", spread * 10_000.0)
    }
}

/// Execute the oas command.
pub fn execute(args: OasArgs, format: OutputFormat) -> Result<()> {
    let input = args.input.load()?;
    let curve = input.curve()?;
    let solver = input.config.solver.with_domain(Domain::Unbounded);

    let rows: Vec<OasRow> = input
        .instruments
        .iter()
        .enumerate()
        .map(|(index, instrument)| {
            let flows = &instrument.cash_flows;
            let result = oas_with(flows, &curve, instrument.price, args.guess, &solver);
            if !result.is_converged() {
                warn!("spread for instrument {index} did not converge");
            }
            OasRow {
                index,
                maturity: flows.maturity().unwrap_or(f64::NAN),
                price: instrument.price,
                spread: result.root,
                iterations: result.iterations,
                residual: result.residual,
            }
        })
        .collect();

    print_output(&rows, format)
}
