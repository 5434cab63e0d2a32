//! Option-adjusted spread over a curve.
//!
//! The OAS is the constant spread `s` added to every forward rate of a base
//! curve such that the instrument reprices:
//!
//! ```text
//! price = Σ cᵢ · D(uᵢ) · exp(-s · uᵢ)
//! ```
//!
//! Shifted curves are borrowed views ([`TranslatedCurve`]), so the base
//! curve is never copied.

use tenor_curves::{Curve, TranslatedCurve};
use tenor_math::solvers::{newton, Domain, SolverConfig, SolverResult};

use super::pricing::{duration, present};
use crate::cashflows::Instrument;
use crate::error::{AnalyticsError, AnalyticsResult};

fn default_config() -> SolverConfig {
    SolverConfig::default().with_domain(Domain::Unbounded)
}

/// Solves for the spread over `curve` that reprices `instrument` to `price`.
///
/// Spreads may be negative, so the solve runs on the unbounded domain.
/// Returns NaN if Newton does not converge.
///
/// # Example
///
/// ```rust
/// use tenor_analytics::cashflows::FixedCoupon;
/// use tenor_analytics::valuation::{oas, present};
/// use tenor_curves::{Curve, PiecewiseFlatCurve};
///
/// let curve = PiecewiseFlatCurve::from_knots(vec![2.0, 5.0], vec![0.03, 0.04], f64::NAN).unwrap();
/// let bond = FixedCoupon::new(0.05, 5.0, 1.0);
/// let price = present(&bond, &curve.translated(-0.0025));
///
/// assert!((oas(&bond, &curve, price, 0.0) + 0.0025).abs() < 1e-8);
/// ```
pub fn oas<I, C>(instrument: &I, curve: &C, price: f64, initial_spread: f64) -> f64
where
    I: Instrument + ?Sized,
    C: Curve + ?Sized,
{
    oas_with(instrument, curve, price, initial_spread, &default_config()).root
}

/// [`oas`] with an explicit solver configuration.
pub fn oas_with<I, C>(
    instrument: &I,
    curve: &C,
    price: f64,
    initial_spread: f64,
    config: &SolverConfig,
) -> SolverResult
where
    I: Instrument + ?Sized,
    C: Curve + ?Sized,
{
    newton(
        |s| present(instrument, &TranslatedCurve::new(curve, s)) - price,
        |s| duration(instrument, &TranslatedCurve::new(curve, s)),
        initial_spread,
        config,
    )
}

/// [`oas`] returning an error instead of NaN.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidInput`] if the instrument has no cash
/// flows, and [`AnalyticsError::SolverFailed`] if Newton does not converge.
pub fn oas_checked<I, C>(
    instrument: &I,
    curve: &C,
    price: f64,
    initial_spread: f64,
) -> AnalyticsResult<f64>
where
    I: Instrument + ?Sized,
    C: Curve + ?Sized,
{
    if instrument.maturity().is_none() {
        return Err(AnalyticsError::invalid_input(
            "cannot solve spread for an instrument without cash flows",
        ));
    }
    oas_with(instrument, curve, price, initial_spread, &default_config())
        .into_result()
        .map_err(|e| AnalyticsError::solver_failed("oas", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cashflows::{CashFlow, FixedCoupon};
    use approx::assert_relative_eq;
    use tenor_curves::{ConstantCurve, PiecewiseFlatCurve};

    fn curve() -> PiecewiseFlatCurve {
        PiecewiseFlatCurve::from_knots(
            vec![0.5, 1.0, 2.0, 5.0, 10.0],
            vec![0.02, 0.022, 0.027, 0.033, 0.036],
            f64::NAN,
        )
        .unwrap()
    }

    #[test]
    fn test_recovers_positive_spread() {
        let curve = curve();
        let bond = FixedCoupon::new(0.045, 8.0, 2.0).with_notional(100.0);
        let price = present(&bond, &curve.translated(0.0125));

        assert_relative_eq!(oas(&bond, &curve, price, 0.0), 0.0125, epsilon = 1e-9);
    }

    #[test]
    fn test_recovers_negative_spread() {
        let curve = curve();
        let bond = FixedCoupon::new(0.01, 3.0, 1.0).with_notional(100.0);
        let price = present(&bond, &curve.translated(-0.004));

        assert_relative_eq!(oas(&bond, &curve, price, 0.01), -0.004, epsilon = 1e-9);
    }

    #[test]
    fn test_spread_over_flat_curve_is_yield_difference() {
        let flat = ConstantCurve::new(0.03);
        let zero = vec![CashFlow::new(2.0, 1.0)];
        let price = (-0.07_f64).exp();

        assert_relative_eq!(oas(&zero, &flat, price, 0.0), 0.005, epsilon = 1e-8);
    }

    #[test]
    fn test_does_not_touch_the_curve() {
        let curve = curve();
        let before = curve.clone();
        let bond = FixedCoupon::new(0.05, 4.0, 2.0);
        let _ = oas(&bond, &curve, 1.0, 0.0);

        assert_eq!(curve, before);
    }

    #[test]
    fn test_checked_on_curve_gap() {
        // The bond outlives the curve, so every present value is NaN.
        let curve = curve();
        let bond = FixedCoupon::new(0.05, 12.0, 1.0);

        assert!(oas(&bond, &curve, 1.0, 0.0).is_nan());
        assert!(matches!(
            oas_checked(&bond, &curve, 1.0, 0.0),
            Err(AnalyticsError::SolverFailed { .. })
        ));
    }
}
