//! Bootstrap command implementation.
//!
//! Calibrates one knot per instrument and prints the knots, optionally with
//! the repricing audit.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tenor_analytics::bootstrap::{BootstrapResult, KnotCalibration, RepricingCheck};

use crate::cli::OutputFormat;
use crate::commands::InputArgs;
use crate::output::{
    format_error, format_rate, format_value, print_header, print_json, print_output,
    print_success, print_warning,
};

/// Arguments for the bootstrap command.
#[derive(Args, Debug)]
pub struct BootstrapArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Also print how each instrument reprices on the finished curve
    #[arg(long)]
    pub repricing: bool,

    /// Exit with an error unless every instrument calibrates and reprices
    #[arg(long)]
    pub strict: bool,
}

/// One calibrated knot.
#[derive(Debug, Serialize, Tabled)]
pub struct KnotRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Maturity", display_with = "format_value")]
    pub maturity: f64,
    #[tabled(rename = "Forward", display_with = "format_rate")]
    pub rate: f64,
    #[tabled(rename = "Iterations")]
    pub iterations: u32,
    #[tabled(rename = "Residual", display_with = "format_error")]
    pub residual: f64,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl From<&KnotCalibration> for KnotRow {
    fn from(c: &KnotCalibration) -> Self {
        Self {
            index: c.index,
            maturity: c.maturity,
            rate: c.rate,
            iterations: c.iterations,
            residual: c.residual,
            status: c.status.to_string(),
        }
    }
}

/// One repricing check.
#[derive(Debug, Serialize, Tabled)]
pub struct RepricingRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Target", display_with = "format_value")]
    pub target: f64,
    #[tabled(rename = "Model", display_with = "format_value")]
    pub model: f64,
    #[tabled(rename = "Error", display_with = "format_error")]
    pub error: f64,
    #[tabled(rename = "Passed")]
    pub passed: bool,
}

impl From<&RepricingCheck> for RepricingRow {
    fn from(c: &RepricingCheck) -> Self {
        Self {
            index: c.index,
            target: c.target,
            model: c.model,
            error: c.error,
            passed: c.passed,
        }
    }
}

#[derive(Serialize)]
struct BootstrapOutput {
    valid: bool,
    knots: Vec<KnotRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repricing: Option<Vec<RepricingRow>>,
}

/// Execute the bootstrap command.
pub fn execute(args: BootstrapArgs, format: OutputFormat) -> Result<()> {
    let input = args.input.load()?;
    let result = input.bootstrap();

    let knots: Vec<KnotRow> = result.calibrations.iter().map(KnotRow::from).collect();
    let repricing: Option<Vec<RepricingRow>> = args.repricing.then(|| {
        result
            .repricing
            .checks()
            .iter()
            .map(RepricingRow::from)
            .collect()
    });

    match format {
        OutputFormat::Table => {
            print_header("Bootstrapped Knots");
            print_output(&knots, format)?;
            if let Some(rows) = &repricing {
                print_header("Repricing");
                print_output(rows, format)?;
            }
            report_status(&result);
        }
        OutputFormat::Json => print_json(&BootstrapOutput {
            valid: result.is_valid(),
            knots,
            repricing,
        })?,
    }

    if args.strict {
        result.into_curve_strict()?;
    }
    Ok(())
}

fn report_status(result: &BootstrapResult) {
    if result.is_valid() {
        print_success(&format!(
            "{} knots, max repricing error {:.2e}",
            result.curve.len(),
            result.repricing.max_error()
        ));
        return;
    }
    for index in result.failed_instruments() {
        print_warning(&format!("instrument {index} produced no knot"));
    }
    let failed = result.repricing.failed_count();
    if failed > 0 {
        print_warning(&format!(
            "{failed} instrument(s) outside repricing tolerance {:.2e}",
            result.repricing.tolerance()
        ));
    }
}
