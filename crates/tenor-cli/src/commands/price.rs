//! Price command implementation.
//!
//! Values every instrument in the input against the curve: present value
//! and its sensitivities to a parallel shift.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tenor_analytics::cashflows::Instrument;
use tenor_analytics::valuation::{convexity, duration, present};

use crate::cli::OutputFormat;
use crate::commands::InputArgs;
use crate::output::{format_value, print_output};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Valuation of one instrument.
#[derive(Debug, Serialize, Tabled)]
pub struct PriceRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Maturity", display_with = "format_value")]
    pub maturity: f64,
    #[tabled(rename = "Target", display_with = "format_value")]
    pub target: f64,
    #[tabled(rename = "Present", display_with = "format_value")]
    pub present: f64,
    #[tabled(rename = "Duration", display_with = "format_value")]
    pub duration: f64,
    #[tabled(rename = "Convexity", display_with = "format_value")]
    pub convexity: f64,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, format: OutputFormat) -> Result<()> {
    let input = args.input.load()?;
    let curve = input.curve()?;

    let rows: Vec<PriceRow> = input
        .instruments
        .iter()
        .enumerate()
        .map(|(index, instrument)| {
            let flows = &instrument.cash_flows;
            PriceRow {
                index,
                maturity: flows.maturity().unwrap_or(f64::NAN),
                target: instrument.price,
                present: present(flows, &curve),
                duration: duration(flows, &curve),
                convexity: convexity(flows, &curve),
            }
        })
        .collect();

    print_output(&rows, format)
}
