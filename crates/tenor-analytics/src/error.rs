//! Error types for valuation and bootstrapping.
//!
//! The numerical functions in this crate report failure as NaN. The errors
//! here back their checked companions and the constructors that validate
//! caller input.

use tenor_curves::CurveError;
use tenor_math::MathError;
use thiserror::Error;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Unified error type for analytics operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    // ========== Input Errors ==========
    /// Cash flows are not a valid schedule.
    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    /// Parallel input sequences have different lengths.
    #[error("length mismatch: {times} times but {amounts} amounts")]
    LengthMismatch {
        /// Number of times supplied.
        times: usize,
        /// Number of amounts supplied.
        amounts: usize,
    },

    /// Invalid input parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // ========== Solver Errors ==========
    /// A root solve did not produce a usable value.
    #[error("{operation} failed: {source}")]
    SolverFailed {
        /// What was being solved for.
        operation: &'static str,
        /// The underlying solver error.
        #[source]
        source: MathError,
    },

    // ========== Bootstrap Errors ==========
    /// An instrument could not be calibrated to a knot.
    #[error("bootstrap failed at instrument {index} (maturity {maturity}): {reason}")]
    BootstrapFailed {
        /// Position of the instrument in the input.
        index: usize,
        /// Maturity of the instrument, NaN if it has no cash flows.
        maturity: f64,
        /// Why calibration failed.
        reason: String,
    },

    /// The bootstrapped curve does not reprice its inputs.
    #[error("repricing failed for {failed} instrument(s), max error {max_error:.2e}")]
    RepricingFailed {
        /// Number of instruments outside tolerance.
        failed: usize,
        /// Largest absolute repricing error.
        max_error: f64,
    },

    // ========== Curve Errors ==========
    /// Curve construction error.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl AnalyticsError {
    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule(reason.into())
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Wraps a solver error with the quantity being solved for.
    #[must_use]
    pub fn solver_failed(operation: &'static str, source: MathError) -> Self {
        Self::SolverFailed { operation, source }
    }
}
