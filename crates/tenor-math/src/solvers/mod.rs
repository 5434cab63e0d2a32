//! Root-finding algorithms.
//!
//! This module provides the two one-dimensional solvers used throughout the
//! curve kernel:
//!
//! - [`secant`]: Two initial guesses, no derivative. Once the guesses straddle
//!   the root, the bracket is preserved (regula falsi with Illinois weighting).
//! - [`newton`]: One initial guess plus an analytic derivative. Iterates are
//!   kept inside a [`Domain`]; by default strictly positive.
//!
//! # Contract
//!
//! Both solvers return a [`SolverResult`] holding the root, the residual at
//! the root and the number of iterations used. A solve terminates as soon as
//! `|f(x)| <= tolerance`. When the iteration budget runs out, or the iteration
//! cannot proceed (flat secant, zero derivative, non-finite values), the
//! returned root is NaN. Callers check with [`SolverResult::is_converged`] or
//! convert with [`SolverResult::into_result`].
//!
//! # Example
//!
//! ```rust
//! use tenor_math::solvers::{newton, secant, SolverConfig};
//!
//! let f = |x: f64| x * x - 4.0;
//! let df = |x: f64| 2.0 * x;
//! let config = SolverConfig::default();
//!
//! let by_newton = newton(f, df, 1.0, &config);
//! let by_secant = secant(f, 1.0, 3.0, &config);
//!
//! assert!((by_newton.root - 2.0).abs() < 1e-8);
//! assert!((by_secant.root - 2.0).abs() < 1e-8);
//! ```

mod newton;
mod secant;

pub use newton::{newton, NewtonSolver};
pub use secant::{secant, SecantSolver};

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Default tolerance on the residual: the square root of machine epsilon.
pub const DEFAULT_TOLERANCE: f64 = 1.490_116_119_384_765_6e-8;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Admissible region for Newton iterates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Iterates stay strictly positive. A step that would leave the domain
    /// halves the previous iterate instead.
    #[default]
    Positive,
    /// No restriction on iterates.
    Unbounded,
}

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Convergence threshold on `|f(x)|`.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
    /// Admissible region for Newton iterates. Ignored by the secant solver.
    pub domain: Domain,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            domain: Domain::Positive,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration on the default domain.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            domain: Domain::default(),
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the Newton domain.
    #[must_use]
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// Checks that the configuration can drive a solve.
    pub fn validate(&self) -> MathResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input(
                "max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found, or NaN if the solve failed.
    pub root: f64,
    /// Function value at the last iterate.
    pub residual: f64,
    /// Number of iterations used.
    pub iterations: u32,
}

impl SolverResult {
    pub(crate) fn converged(root: f64, residual: f64, iterations: u32) -> Self {
        Self {
            root,
            residual,
            iterations,
        }
    }

    pub(crate) fn failed(residual: f64, iterations: u32) -> Self {
        Self {
            root: f64::NAN,
            residual,
            iterations,
        }
    }

    /// Returns true if the solver produced a usable root.
    pub fn is_converged(&self) -> bool {
        !self.root.is_nan()
    }

    /// Converts a NaN root into [`MathError::ConvergenceFailed`].
    pub fn into_result(self) -> MathResult<f64> {
        if self.is_converged() {
            Ok(self.root)
        } else {
            Err(MathError::convergence_failed(
                self.iterations,
                self.residual.abs(),
            ))
        }
    }
}
