//! Newton-Raphson root-finding algorithm with domain clamping.

use log::{trace, warn};

use crate::solvers::{Domain, SolverConfig, SolverResult};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// On [`Domain::Positive`] a step that would land on or below zero is
/// replaced by `x_n / 2`, so the iterate approaches the boundary without
/// crossing it. Rates and volatilities are the usual unknowns here.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root, residual and iteration count. The root is NaN if the budget is
/// exhausted, the derivative vanishes, or the objective is not finite. On
/// [`Domain::Positive`] a non-positive initial guess also fails.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{newton, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton(f, df, 1.5, &SolverConfig::default());
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
/// ```
pub fn newton<F, DF>(f: F, df: DF, initial_guess: f64, config: &SolverConfig) -> SolverResult
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    if config.domain == Domain::Positive && !(x > 0.0) {
        warn!("newton: initial guess {x} outside the positive domain");
        return SolverResult::failed(f(x), 0);
    }

    let mut iterations = 0;
    loop {
        let fx = f(x);

        if !fx.is_finite() {
            warn!("newton: non-finite objective at x = {x}");
            return SolverResult::failed(fx, iterations);
        }

        if fx.abs() <= config.tolerance {
            return SolverResult::converged(x, fx, iterations);
        }

        if iterations >= config.max_iterations {
            warn!(
                "newton: no convergence after {iterations} iterations (residual {:.3e})",
                fx.abs()
            );
            return SolverResult::failed(fx, iterations);
        }

        let dfx = df(x);
        if dfx == 0.0 || !dfx.is_finite() {
            warn!("newton: unusable derivative {dfx} at x = {x}");
            return SolverResult::failed(fx, iterations);
        }

        let next = x - fx / dfx;
        x = match config.domain {
            Domain::Positive if next <= 0.0 => 0.5 * x,
            _ => next,
        };
        iterations += 1;

        trace!("newton[{iterations}]: x = {x}, f = {fx:.3e}");
    }
}

/// Reusable Newton solver bound to a configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonSolver {
    config: SolverConfig,
}

impl NewtonSolver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves `f(x) = 0` from `initial_guess` using the derivative `df`.
    pub fn solve<F, DF>(&self, f: F, df: DF, initial_guess: f64) -> SolverResult
    where
        F: Fn(f64) -> f64,
        DF: Fn(f64) -> f64,
    {
        newton(f, df, initial_guess, &self.config)
    }
}
