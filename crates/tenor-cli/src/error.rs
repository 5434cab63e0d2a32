//! CLI error types.

use std::path::PathBuf;

use tenor_analytics::AnalyticsError;
use tenor_curves::CurveError;
use tenor_math::MathError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file extension is not `.json` or `.toml`.
    #[error("Unsupported input format: {0}. Use a .json or .toml file.")]
    UnsupportedFormat(PathBuf),

    /// The input file could not be read.
    #[error("Cannot read {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid.
    #[error("Cannot parse {path}: {reason}")]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// The input defines no instruments.
    #[error("Input defines no instruments")]
    NoInstruments,

    /// Solver settings in the input are unusable.
    #[error("Invalid solver settings: {0}")]
    Solver(#[from] MathError),

    /// Curve construction error.
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),

    /// Calculation error.
    #[error("Calculation error: {0}")]
    Analytics(#[from] AnalyticsError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
