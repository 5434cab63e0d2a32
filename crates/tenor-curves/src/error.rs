//! Error types for curve construction.
//!
//! Curve reads never fail: out-of-domain queries evaluate to NaN. These
//! errors only cover building a curve from caller-supplied knots.

use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Knot times are not strictly increasing.
    #[error("Non-monotonic knot at index {index}: {previous:.6} >= {time:.6}")]
    NonMonotonicKnot {
        /// Index of the offending knot.
        index: usize,
        /// Time of the preceding knot.
        previous: f64,
        /// Time of the offending knot.
        time: f64,
    },

    /// Knot time is not a positive finite number.
    #[error("Invalid knot time {time}: must be positive and finite")]
    InvalidKnotTime {
        /// The rejected time.
        time: f64,
    },

    /// Times and rates have different lengths.
    #[error("Length mismatch: {times} knot times but {rates} rates")]
    LengthMismatch {
        /// Number of times supplied.
        times: usize,
        /// Number of rates supplied.
        rates: usize,
    },
}

impl CurveError {
    /// Creates a non-monotonic knot error.
    #[must_use]
    pub fn non_monotonic(index: usize, previous: f64, time: f64) -> Self {
        Self::NonMonotonicKnot {
            index,
            previous,
            time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::non_monotonic(2, 3.0, 2.5);
        assert_eq!(
            err.to_string(),
            "Non-monotonic knot at index 2: 3.000000 >= 2.500000"
        );

        let err = CurveError::LengthMismatch { times: 3, rates: 2 };
        assert!(err.to_string().contains("3 knot times but 2 rates"));
    }
}
