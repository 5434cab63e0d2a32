//! Input files: solver configuration, an optional curve, priced instruments.
//!
//! ```toml
//! [config]
//! fallback_guess = 0.01
//!
//! [config.solver]
//! tolerance = 1e-10
//!
//! # Optional. Without it, commands that need a curve bootstrap one from
//! # the instruments below.
//! [curve]
//! times = [1.0, 2.0]
//! rates = [0.02, 0.025]
//!
//! [[instruments]]
//! price = 0.98
//! cash_flows = [{ time = 1.0, amount = 1.0 }]
//! ```
//!
//! JSON files carry the same structure.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use tenor_analytics::bootstrap::{BootstrapConfig, BootstrapResult, Bootstrapper};
use tenor_analytics::cashflows::Schedule;
use tenor_curves::PiecewiseFlatCurve;

use crate::error::{CliError, CliResult};

/// Parsed input file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InputFile {
    /// Bootstrap and solver settings.
    pub config: BootstrapConfig,
    /// Curve to value against, if given explicitly.
    pub curve: Option<CurveSpec>,
    /// Instruments with their target prices, in maturity order.
    pub instruments: Vec<PricedInstrument>,
}

/// Knots of a piecewise-flat curve.
#[derive(Debug, Clone, Deserialize)]
pub struct CurveSpec {
    /// Knot times.
    pub times: Vec<f64>,
    /// Forward rate on the segment ending at each time.
    pub rates: Vec<f64>,
    /// Forward rate beyond the last knot. Undefined if absent.
    #[serde(default)]
    pub extrapolation_rate: Option<f64>,
}

/// A cash-flow schedule and its target price.
#[derive(Debug, Clone, Deserialize)]
pub struct PricedInstrument {
    /// Target present value.
    pub price: f64,
    /// Validated cash flows.
    pub cash_flows: Schedule,
}

impl InputFile {
    /// Reads a `.json` or `.toml` input file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let input = Self::parse(&text, path)?;
        if input.instruments.is_empty() {
            return Err(CliError::NoInstruments);
        }
        debug!(
            "Loaded {} instruments from {}",
            input.instruments.len(),
            path.display()
        );
        Ok(input)
    }

    fn parse(text: &str, path: &Path) -> CliResult<Self> {
        let parse_error = |reason: String| CliError::Parse {
            path: path.to_path_buf(),
            reason,
        };
        let input: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(text).map_err(|e| parse_error(e.to_string()))?,
            Some("toml") => toml::from_str(text).map_err(|e| parse_error(e.to_string()))?,
            _ => return Err(CliError::UnsupportedFormat(PathBuf::from(path))),
        };
        input.config.solver.validate()?;
        Ok(input)
    }

    /// Schedules in input order.
    pub fn schedules(&self) -> Vec<Schedule> {
        self.instruments.iter().map(|i| i.cash_flows.clone()).collect()
    }

    /// Target prices in input order.
    pub fn prices(&self) -> Vec<f64> {
        self.instruments.iter().map(|i| i.price).collect()
    }

    /// Bootstraps the instruments with the file's configuration.
    pub fn bootstrap(&self) -> BootstrapResult {
        Bootstrapper::new(self.config).bootstrap(&self.schedules(), &self.prices())
    }

    /// The explicit curve if present, otherwise a strict bootstrap of the
    /// instruments.
    pub fn curve(&self) -> CliResult<PiecewiseFlatCurve> {
        if let Some(spec) = &self.curve {
            let curve = PiecewiseFlatCurve::from_knots(
                spec.times.clone(),
                spec.rates.clone(),
                spec.extrapolation_rate.unwrap_or(f64::NAN),
            )?;
            return Ok(curve);
        }
        info!("No curve in input; bootstrapping from instruments");
        Ok(self.bootstrap().into_curve_strict()?)
    }
}
