//! Flat yield that reprices an instrument.

use tenor_curves::ConstantCurve;
use tenor_math::solvers::{newton, SolverConfig, SolverResult};

use super::pricing::{duration, present};
use crate::cashflows::Instrument;
use crate::error::{AnalyticsError, AnalyticsResult};

/// Solves for the continuously-compounded flat rate `y` with
/// `present(instrument, ConstantCurve(y)) == price`.
///
/// Newton's method on the positive domain with the default tolerance.
/// Returns NaN if the solve fails.
///
/// # Example
///
/// ```rust
/// use tenor_analytics::cashflows::FixedCoupon;
/// use tenor_analytics::valuation::{present, yield_rate};
/// use tenor_curves::ConstantCurve;
///
/// let bond = FixedCoupon::new(0.05, 5.0, 2.0);
/// let price = present(&bond, &ConstantCurve::new(0.04));
///
/// assert!((yield_rate(&bond, price, 0.05) - 0.04).abs() < 1e-8);
/// ```
pub fn yield_rate<I>(instrument: &I, price: f64, initial_guess: f64) -> f64
where
    I: Instrument + ?Sized,
{
    yield_rate_with(instrument, price, initial_guess, &SolverConfig::default()).root
}

/// [`yield_rate`] with an explicit solver configuration, returning the full
/// solver outcome.
pub fn yield_rate_with<I>(
    instrument: &I,
    price: f64,
    initial_guess: f64,
    config: &SolverConfig,
) -> SolverResult
where
    I: Instrument + ?Sized,
{
    newton(
        |y| present(instrument, &ConstantCurve::new(y)) - price,
        |y| duration(instrument, &ConstantCurve::new(y)),
        initial_guess,
        config,
    )
}

/// [`yield_rate`] returning an error instead of NaN.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidInput`] if the instrument has no cash
/// flows, and [`AnalyticsError::SolverFailed`] if Newton does not converge.
pub fn yield_rate_checked<I>(instrument: &I, price: f64, initial_guess: f64) -> AnalyticsResult<f64>
where
    I: Instrument + ?Sized,
{
    if instrument.maturity().is_none() {
        return Err(AnalyticsError::invalid_input(
            "cannot solve yield for an instrument without cash flows",
        ));
    }
    yield_rate_with(instrument, price, initial_guess, &SolverConfig::default())
        .into_result()
        .map_err(|e| AnalyticsError::solver_failed("yield", e))
}
