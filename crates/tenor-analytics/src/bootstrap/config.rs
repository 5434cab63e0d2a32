//! Bootstrap configuration.

use serde::{Deserialize, Serialize};
use tenor_math::solvers::SolverConfig;

/// Initial guess for the first knot, and whenever the previous knot's rate
/// is not a valid starting point for the solver's domain.
pub const DEFAULT_FALLBACK_GUESS: f64 = 0.01;

/// Largest absolute repricing error accepted by the repricing report.
pub const DEFAULT_REPRICING_TOLERANCE: f64 = 1e-6;

/// Configuration for [`Bootstrapper`](super::Bootstrapper).
///
/// Every field has a default, so a partial TOML or JSON table is enough:
///
/// ```rust
/// use tenor_analytics::bootstrap::BootstrapConfig;
///
/// let config: BootstrapConfig = serde_json::from_str(r#"{"fallback_guess": 0.02}"#).unwrap();
/// assert_eq!(config.fallback_guess, 0.02);
/// assert_eq!(config.solver.max_iterations, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Newton configuration for each knot.
    pub solver: SolverConfig,
    /// Starting rate when there is no usable previous knot.
    pub fallback_guess: f64,
    /// Repricing tolerance for the validation report.
    pub repricing_tolerance: f64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            fallback_guess: DEFAULT_FALLBACK_GUESS,
            repricing_tolerance: DEFAULT_REPRICING_TOLERANCE,
        }
    }
}

impl BootstrapConfig {
    /// Sets the solver configuration.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the fallback initial guess.
    #[must_use]
    pub fn with_fallback_guess(mut self, guess: f64) -> Self {
        self.fallback_guess = guess;
        self
    }

    /// Sets the repricing tolerance.
    #[must_use]
    pub fn with_repricing_tolerance(mut self, tolerance: f64) -> Self {
        self.repricing_tolerance = tolerance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenor_math::solvers::Domain;

    #[test]
    fn test_defaults() {
        let config = BootstrapConfig::default();

        assert_eq!(config.fallback_guess, 0.01);
        assert_eq!(config.repricing_tolerance, 1e-6);
        assert_eq!(config.solver.domain, Domain::Positive);
    }

    #[test]
    fn test_partial_solver_table() {
        let config: BootstrapConfig =
            serde_json::from_str(r#"{"solver": {"domain": "unbounded"}}"#).unwrap();

        assert_eq!(config.solver.domain, Domain::Unbounded);
        assert_eq!(config.solver.max_iterations, 100);
        assert_eq!(config.fallback_guess, DEFAULT_FALLBACK_GUESS);
    }
}
