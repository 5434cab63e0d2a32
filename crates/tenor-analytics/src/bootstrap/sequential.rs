//! Sequential bootstrap algorithm.

use std::time::Instant;

use log::{debug, warn};
use tenor_curves::{Curve, PiecewiseFlatCurve};
use tenor_math::solvers::{newton, Domain};

use super::config::BootstrapConfig;
use super::report::{
    BootstrapResult, CalibrationStatus, KnotCalibration, RepricingCheck, RepricingReport,
};
use crate::cashflows::Instrument;
use crate::valuation::{duration_beyond, present};

/// Sequential bootstrapper for piecewise-flat forward curves.
///
/// The bootstrapper is the single writer of the curve it builds: knots are
/// appended in input order and never revisited. Trial rates are priced
/// through a borrowed [`Extended`](tenor_curves::Extended) view, so the
/// curve is only touched once a knot has been solved.
///
/// # Example
///
/// ```rust
/// use tenor_analytics::bootstrap::{BootstrapConfig, Bootstrapper};
/// use tenor_analytics::cashflows::Schedule;
/// use tenor_curves::Curve;
///
/// let instruments = vec![
///     Schedule::zero_coupon(1.0, 1.0).unwrap(),
///     Schedule::zero_coupon(2.0, 1.0).unwrap(),
/// ];
/// let prices = [(-0.02_f64).exp(), (-0.05_f64).exp()];
///
/// let result = Bootstrapper::new(BootstrapConfig::default()).bootstrap(&instruments, &prices);
///
/// assert!(result.is_valid());
/// assert!((result.curve.forward(1.5) - 0.03).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Bootstrapper {
    config: BootstrapConfig,
}

impl Bootstrapper {
    /// Creates a bootstrapper.
    #[must_use]
    pub fn new(config: BootstrapConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Builds a curve from scratch.
    ///
    /// # Panics
    ///
    /// Panics if `instruments` and `prices` have different lengths.
    pub fn bootstrap<I: Instrument>(&self, instruments: &[I], prices: &[f64]) -> BootstrapResult {
        self.extend(PiecewiseFlatCurve::new(), instruments, prices)
    }

    /// Appends one knot per instrument to an existing curve.
    ///
    /// Instruments are taken in the order given, which should be increasing
    /// maturity. An instrument that fails to calibrate is recorded with a
    /// NaN rate and skipped.
    ///
    /// # Panics
    ///
    /// Panics if `instruments` and `prices` have different lengths.
    pub fn extend<I: Instrument>(
        &self,
        mut curve: PiecewiseFlatCurve,
        instruments: &[I],
        prices: &[f64],
    ) -> BootstrapResult {
        assert_eq!(
            instruments.len(),
            prices.len(),
            "Bootstrapper: {} instruments but {} prices",
            instruments.len(),
            prices.len()
        );
        let start = Instant::now();

        let mut calibrations = Vec::with_capacity(instruments.len());
        for (index, (instrument, &price)) in instruments.iter().zip(prices).enumerate() {
            let calibration = self.calibrate(&curve, instrument, price, index);
            if calibration.is_calibrated() {
                if let Err(err) = curve.try_push(calibration.maturity, calibration.rate) {
                    warn!("Instrument {index}: knot rejected: {err}");
                    calibrations.push(KnotCalibration::failed(
                        index,
                        calibration.maturity,
                        CalibrationStatus::InvalidMaturity,
                    ));
                    continue;
                }
                debug!(
                    "Knot {}: t={:.6} f={:.8} ({} iterations, residual {:.2e})",
                    curve.len() - 1,
                    calibration.maturity,
                    calibration.rate,
                    calibration.iterations,
                    calibration.residual
                );
            } else {
                warn!(
                    "Instrument {index} (maturity {}) not calibrated: {}",
                    calibration.maturity, calibration.status
                );
            }
            calibrations.push(calibration);
        }

        let repricing = self.reprice(&curve, instruments, prices);
        BootstrapResult {
            curve,
            calibrations,
            repricing,
            build_duration: start.elapsed(),
        }
    }

    /// Solves the forward rate for the segment that `instrument` adds to
    /// `curve`, without modifying the curve.
    ///
    /// The segment runs from the last knot (or zero) to the instrument's
    /// maturity. Newton is seeded with the last knot's rate when it lies in
    /// the solver's domain, else with the fallback guess.
    pub fn calibrate<I: Instrument + ?Sized>(
        &self,
        curve: &PiecewiseFlatCurve,
        instrument: &I,
        price: f64,
        index: usize,
    ) -> KnotCalibration {
        let Some(maturity) = instrument.maturity() else {
            return KnotCalibration::failed(index, f64::NAN, CalibrationStatus::NoCashFlows);
        };
        if !maturity.is_finite() {
            return KnotCalibration::failed(index, maturity, CalibrationStatus::InvalidMaturity);
        }
        let horizon = curve.last_time();
        if !(maturity > horizon) {
            return KnotCalibration::failed(
                index,
                maturity,
                CalibrationStatus::NotBeyondFrontier { frontier: horizon },
            );
        }

        let guess = self.initial_guess(curve);
        let result = newton(
            |f| present(instrument, &curve.extended(horizon, f)) - price,
            |f| duration_beyond(instrument, &curve.extended(horizon, f), horizon),
            guess,
            &self.config.solver,
        );

        let status = if result.is_converged() {
            CalibrationStatus::Calibrated
        } else {
            CalibrationStatus::NotConverged
        };
        KnotCalibration {
            index,
            maturity,
            rate: result.root,
            iterations: result.iterations,
            residual: result.residual,
            status,
        }
    }

    fn initial_guess(&self, curve: &PiecewiseFlatCurve) -> f64 {
        let admissible = |rate: f64| {
            rate.is_finite() && (rate > 0.0 || self.config.solver.domain == Domain::Unbounded)
        };
        match curve.back() {
            Some((_, rate)) if admissible(rate) => rate,
            _ => self.config.fallback_guess,
        }
    }

    fn reprice<I: Instrument>(
        &self,
        curve: &PiecewiseFlatCurve,
        instruments: &[I],
        prices: &[f64],
    ) -> RepricingReport {
        let tolerance = self.config.repricing_tolerance;
        let checks = instruments
            .iter()
            .zip(prices)
            .enumerate()
            .map(|(index, (instrument, &target))| {
                RepricingCheck::new(index, target, present(instrument, curve), tolerance)
            })
            .collect();
        RepricingReport::new(checks, tolerance)
    }
}

/// Bootstraps a curve with the default configuration.
///
/// Returns the curve alone; failed instruments leave no knot. Use
/// [`Bootstrapper`] for the calibration and repricing report.
///
/// # Panics
///
/// Panics if `instruments` and `prices` have different lengths.
pub fn bootstrap<I: Instrument>(instruments: &[I], prices: &[f64]) -> PiecewiseFlatCurve {
    Bootstrapper::default().bootstrap(instruments, prices).into_curve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cashflows::{CashFlow, FixedCoupon, Schedule};
    use approx::assert_relative_eq;
    use tenor_math::solvers::SolverConfig;

    fn zero(time: f64) -> Vec<CashFlow> {
        vec![CashFlow::new(time, 1.0)]
    }

    #[test]
    fn test_single_zero_coupon() {
        let instruments = [vec![CashFlow::new(1.0, 0.03_f64.exp())]];
        let result = Bootstrapper::default().bootstrap(&instruments, &[1.0]);

        assert!(result.is_valid());
        assert_eq!(result.curve.len(), 1);
        assert_relative_eq!(result.curve.rates()[0], 0.03, epsilon = 1e-8);
        assert_relative_eq!(result.curve.discount(1.0), (-0.03_f64).exp(), epsilon = 1e-8);
    }

    #[test]
    fn test_forwards_between_zero_rates() {
        // Zero rates 2%, 2.5%, 3% at 1, 2, 4 years.
        let instruments = [zero(1.0), zero(2.0), zero(4.0)];
        let prices = [(-0.02_f64).exp(), (-0.05_f64).exp(), (-0.12_f64).exp()];

        let curve = bootstrap(&instruments, &prices);

        assert_eq!(curve.times(), &[1.0, 2.0, 4.0]);
        assert_relative_eq!(curve.rates()[0], 0.02, epsilon = 1e-8);
        assert_relative_eq!(curve.rates()[1], 0.03, epsilon = 1e-8);
        assert_relative_eq!(curve.rates()[2], 0.035, epsilon = 1e-8);
    }

    #[test]
    fn test_coupon_instruments_reprice() {
        let truth = PiecewiseFlatCurve::from_knots(
            vec![2.0, 5.0, 10.0],
            vec![0.025, 0.032, 0.038],
            f64::NAN,
        )
        .unwrap();
        let instruments = [
            FixedCoupon::new(0.03, 2.0, 2.0),
            FixedCoupon::new(0.035, 5.0, 2.0),
            FixedCoupon::new(0.04, 10.0, 2.0),
        ];
        let prices: Vec<f64> = instruments.iter().map(|b| present(b, &truth)).collect();

        let result = Bootstrapper::default().bootstrap(&instruments, &prices);

        assert!(result.is_valid());
        for (solved, expected) in result.curve.rates().iter().zip(truth.rates()) {
            assert_relative_eq!(*solved, *expected, epsilon = 1e-7);
        }
        assert!(result.repricing.max_error() < 1e-7);
    }

    #[test]
    fn test_redundant_instrument_is_skipped() {
        let instruments = [zero(1.0), zero(1.0), zero(2.0)];
        let prices = [(-0.02_f64).exp(), (-0.02_f64).exp(), (-0.05_f64).exp()];

        let result = Bootstrapper::default().bootstrap(&instruments, &prices);

        assert_eq!(result.curve.len(), 2);
        assert_eq!(result.failed_instruments(), vec![1]);
        assert!(result.rates()[1].is_nan());
        assert_eq!(
            result.calibrations[1].status,
            CalibrationStatus::NotBeyondFrontier { frontier: 1.0 }
        );
        assert_relative_eq!(result.rates()[2], 0.03, epsilon = 1e-8);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_unreachable_price_leaves_no_knot() {
        // A discount bond priced above par needs a negative rate.
        let instruments = [zero(1.0), zero(2.0)];
        let prices = [1.01, (-0.04_f64).exp()];

        let result = Bootstrapper::default().bootstrap(&instruments, &prices);

        assert_eq!(result.calibrations[0].status, CalibrationStatus::NotConverged);
        assert_eq!(result.curve.len(), 1);
        assert_relative_eq!(result.curve.rates()[0], 0.02, epsilon = 1e-8);
        assert!(matches!(
            result.into_curve_strict(),
            Err(crate::AnalyticsError::BootstrapFailed { index: 0, .. })
        ));
    }

    #[test]
    fn test_unbounded_domain_allows_negative_rates() {
        let config = BootstrapConfig::default()
            .with_solver(SolverConfig::default().with_domain(Domain::Unbounded));
        let instruments = [zero(1.0), zero(2.0)];
        let prices = [(0.005_f64).exp(), (-0.01_f64).exp()];

        let result = Bootstrapper::new(config).bootstrap(&instruments, &prices);

        assert!(result.is_valid());
        assert_relative_eq!(result.curve.rates()[0], -0.005, epsilon = 1e-8);
        assert_relative_eq!(result.curve.rates()[1], 0.015, epsilon = 1e-8);
    }

    #[test]
    fn test_empty_instrument_is_reported() {
        let instruments = [Schedule::default(), Schedule::zero_coupon(1.0, 1.0).unwrap()];
        let prices = [1.0, (-0.01_f64).exp()];

        let result = Bootstrapper::default().bootstrap(&instruments, &prices);

        assert_eq!(result.calibrations[0].status, CalibrationStatus::NoCashFlows);
        assert!(result.calibrations[0].maturity.is_nan());
        assert_eq!(result.curve.len(), 1);
    }

    #[test]
    fn test_extend_keeps_existing_knots() {
        let mut existing = PiecewiseFlatCurve::new();
        existing.push(1.0, 0.02);

        let price = (-(0.02 + 0.04_f64)).exp();
        let result = Bootstrapper::default().extend(existing, &[zero(2.0)], &[price]);

        assert_eq!(result.curve.rates()[0], 0.02);
        assert_relative_eq!(result.curve.rates()[1], 0.04, epsilon = 1e-8);
    }

    #[test]
    fn test_calibrate_does_not_mutate() {
        let curve = PiecewiseFlatCurve::new();
        let calibration =
            Bootstrapper::default().calibrate(&curve, &zero(1.0)[..], (-0.05_f64).exp(), 0);

        assert!(calibration.is_calibrated());
        assert_relative_eq!(calibration.rate, 0.05, epsilon = 1e-8);
        assert!(curve.is_empty());
    }

    #[test]
    #[should_panic(expected = "2 instruments but 1 prices")]
    fn test_length_mismatch_panics() {
        let _ = bootstrap(&[zero(1.0), zero(2.0)], &[1.0]);
    }
}
