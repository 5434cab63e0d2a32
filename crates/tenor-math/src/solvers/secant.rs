//! Bracket-preserving secant root-finding algorithm.

use log::{trace, warn};

use crate::solvers::{SolverConfig, SolverResult};

/// Secant root-finding algorithm with bracket preservation.
///
/// Starts as a plain secant iteration from two guesses. As soon as the two
/// most recent function values have opposite signs the root is bracketed,
/// and from then on every step keeps it bracketed: when the new point lands
/// on the same side as the latest one, the opposite endpoint is retained
/// (with its function value halved, the Illinois variant of regula falsi)
/// instead of being discarded. This keeps the iteration from running away
/// on objectives that are not convex near the root.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `x0` - First initial guess
/// * `x1` - Second initial guess (should be different from x0)
/// * `config` - Solver configuration; `domain` is ignored
///
/// # Returns
///
/// The root, residual and iteration count. The root is NaN if the budget is
/// exhausted or the secant line degenerates.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{secant, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
///
/// let result = secant(f, 1.0, 2.0, &SolverConfig::default());
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
/// ```
pub fn secant<F>(f: F, x0: f64, x1: f64, config: &SolverConfig) -> SolverResult
where
    F: Fn(f64) -> f64,
{
    let mut x_prev = x0;
    let mut f_prev = f(x_prev);
    let mut x_curr = x1;
    let mut f_curr = f(x_curr);

    if f_prev.abs() <= config.tolerance && f_curr.abs() > config.tolerance {
        return SolverResult::converged(x_prev, f_prev, 0);
    }

    let mut bounded = straddles(f_prev, f_curr);
    let mut iterations = 0;

    loop {
        if !(f_curr.is_finite() && f_prev.is_finite()) {
            warn!("secant: non-finite objective after {iterations} iterations");
            return SolverResult::failed(f_curr, iterations);
        }

        if f_curr.abs() <= config.tolerance {
            return SolverResult::converged(x_curr, f_curr, iterations);
        }

        if iterations >= config.max_iterations {
            warn!(
                "secant: no convergence after {iterations} iterations (residual {:.3e})",
                f_curr.abs()
            );
            return SolverResult::failed(f_curr, iterations);
        }

        let denom = f_curr - f_prev;
        if denom == 0.0 {
            warn!("secant: flat secant line at x = {x_curr}");
            return SolverResult::failed(f_curr, iterations);
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / denom;
        let f_next = f(x_next);
        iterations += 1;

        trace!("secant[{iterations}]: x = {x_next}, f = {f_next:.3e}, bounded = {bounded}");

        if bounded && !straddles(f_next, f_curr) {
            // x_prev still holds the opposite sign, keep it.
            f_prev *= 0.5;
        } else {
            x_prev = x_curr;
            f_prev = f_curr;
        }
        x_curr = x_next;
        f_curr = f_next;

        bounded = bounded || straddles(f_prev, f_curr);
    }
}

/// True if `a` and `b` are non-zero with opposite signs.
fn straddles(a: f64, b: f64) -> bool {
    (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
}

/// Reusable secant solver bound to a configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecantSolver {
    config: SolverConfig,
}

impl SecantSolver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves `f(x) = 0` from the two guesses `x0` and `x1`.
    pub fn solve<F>(&self, f: F, x0: f64, x1: f64) -> SolverResult
    where
        F: Fn(f64) -> f64,
    {
        secant(f, x0, x1, &self.config)
    }
}
