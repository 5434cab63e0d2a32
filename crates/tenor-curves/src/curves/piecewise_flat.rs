//! Piecewise-flat forward curve.
//!
//! The curve stores ordered knots `(time[i], rate[i])` and a fallback
//! extrapolation rate. The forward rate is flat on each half-open segment
//! `(time[i-1], time[i]]`, with `time[-1] = 0`, and equals the extrapolation
//! rate beyond the last knot:
//!
//! ```text
//! rate
//!  │         ┌──────┐
//!  │ ────────┘      │      ┌ ─ ─ ─ ─  extrapolation rate
//!  │                └──────┘
//!  └────────┬──────┬──────┬──────────▶ time
//!          t₀     t₁     t₂
//! ```
//!
//! The integral of the forward rate is cached at every knot, so reads cost
//! one binary search.

use crate::error::{CurveError, CurveResult};
use crate::traits::Curve;

/// A forward-rate curve that is constant between consecutive knots.
///
/// Knot times are strictly increasing and positive. Knots are only ever
/// appended, which is how the bootstrapper grows the curve one calibrated
/// instrument at a time.
///
/// Beyond the last knot the forward rate is the stored extrapolation rate,
/// NaN unless set, so the curve is undefined there until a caller supplies
/// an [`Extrapolation`](crate::Extrapolation) at the read site or sets one.
///
/// # Example
///
/// ```rust
/// use tenor_curves::{Curve, PiecewiseFlatCurve};
///
/// let curve = PiecewiseFlatCurve::from_knots(
///     vec![1.0, 2.0, 3.0],
///     vec![0.02, 0.03, 0.04],
///     0.05,
/// ).unwrap();
///
/// assert_eq!(curve.forward(3.0), 0.04);
/// assert_eq!(curve.forward(3.5), 5e-2);
/// assert_eq!(curve.integral(3.5), curve.integral(3.0) + 0.05 * 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct PiecewiseFlatCurve {
    times: Vec<f64>,
    rates: Vec<f64>,
    /// Integral of the forward rate from 0 to `times[i]`.
    cumulative: Vec<f64>,
    extrapolation_rate: f64,
}

impl Default for PiecewiseFlatCurve {
    fn default() -> Self {
        Self::new()
    }
}

impl PiecewiseFlatCurve {
    /// Creates an empty curve with no extrapolation rate.
    #[must_use]
    pub fn new() -> Self {
        Self::with_extrapolation_rate(f64::NAN)
    }

    /// Creates an empty curve that extrapolates at `rate`.
    #[must_use]
    pub fn with_extrapolation_rate(rate: f64) -> Self {
        Self {
            times: Vec::new(),
            rates: Vec::new(),
            cumulative: Vec::new(),
            extrapolation_rate: rate,
        }
    }

    /// Creates a knotless curve equal to `rate` everywhere.
    #[must_use]
    pub fn constant(rate: f64) -> Self {
        Self::with_extrapolation_rate(rate)
    }

    /// Builds a curve from parallel knot sequences.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequences differ in length, a time is not
    /// positive and finite, or times are not strictly increasing.
    pub fn from_knots(
        times: Vec<f64>,
        rates: Vec<f64>,
        extrapolation_rate: f64,
    ) -> CurveResult<Self> {
        if times.len() != rates.len() {
            return Err(CurveError::LengthMismatch {
                times: times.len(),
                rates: rates.len(),
            });
        }

        let mut curve = Self::with_extrapolation_rate(extrapolation_rate);
        curve.times.reserve(times.len());
        curve.rates.reserve(rates.len());
        curve.cumulative.reserve(times.len());
        for (t, f) in times.into_iter().zip(rates) {
            curve.try_push(t, f)?;
        }
        Ok(curve)
    }

    /// Appends the knot `(t, f)`, checking the ordering invariant.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is not positive and finite, or does not
    /// exceed the current last knot time.
    pub fn try_push(&mut self, t: f64, f: f64) -> CurveResult<()> {
        if !(t.is_finite() && t > 0.0) {
            return Err(CurveError::InvalidKnotTime { time: t });
        }
        let (prev_time, prev_integral) = self.frontier();
        if t <= prev_time {
            return Err(CurveError::non_monotonic(self.times.len(), prev_time, t));
        }

        self.times.push(t);
        self.rates.push(f);
        self.cumulative.push(prev_integral + f * (t - prev_time));
        Ok(())
    }

    /// Appends the knot `(t, f)`.
    ///
    /// # Panics
    ///
    /// Panics if `t` is not positive and finite, or does not exceed the
    /// current last knot time. Both indicate a bug in the caller.
    pub fn push(&mut self, t: f64, f: f64) {
        if let Err(err) = self.try_push(t, f) {
            panic!("PiecewiseFlatCurve::push: {err}");
        }
    }

    /// Returns the last knot, or `None` if the curve has no knots.
    pub fn back(&self) -> Option<(f64, f64)> {
        Some((*self.times.last()?, *self.rates.last()?))
    }

    /// Returns the last knot time, or 0 if the curve has no knots.
    pub fn last_time(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if the curve has no knots.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Knot times, strictly increasing.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Knot rates, one per time.
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Iterates over `(time, rate)` knots in order.
    pub fn knots(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.rates.iter().copied())
    }

    /// Rate used beyond the last knot.
    pub fn extrapolation_rate(&self) -> f64 {
        self.extrapolation_rate
    }

    /// Replaces the rate used beyond the last knot.
    pub fn set_extrapolation_rate(&mut self, rate: f64) {
        self.extrapolation_rate = rate;
    }

    /// Last knot time and the integral up to it, `(0, 0)` when empty.
    fn frontier(&self) -> (f64, f64) {
        match (self.times.last(), self.cumulative.last()) {
            (Some(&t), Some(&i)) => (t, i),
            _ => (0.0, 0.0),
        }
    }

    /// Index of the segment containing `u`: the least `i` with
    /// `time[i] >= u`, or `len()` beyond the last knot.
    fn segment(&self, u: f64) -> usize {
        self.times.partition_point(|&t| t < u)
    }
}

impl Curve for PiecewiseFlatCurve {
    fn raw_value(&self, u: f64) -> f64 {
        self.rates
            .get(self.segment(u))
            .copied()
            .unwrap_or(self.extrapolation_rate)
    }

    fn raw_integral(&self, u: f64) -> f64 {
        let i = self.segment(u);
        let (start, base) = if i == 0 {
            (0.0, 0.0)
        } else {
            (self.times[i - 1], self.cumulative[i - 1])
        };
        let rate = self.rates.get(i).copied().unwrap_or(self.extrapolation_rate);
        base + rate * (u - start)
    }
}

impl PartialEq for PiecewiseFlatCurve {
    fn eq(&self, other: &Self) -> bool {
        self.times == other.times
            && self.rates == other.rates
            && (self.extrapolation_rate == other.extrapolation_rate
                || (self.extrapolation_rate.is_nan() && other.extrapolation_rate.is_nan()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Extrapolation;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    fn three_knots() -> PiecewiseFlatCurve {
        PiecewiseFlatCurve::from_knots(vec![1.0, 2.0, 3.0], vec![0.02, 0.03, 0.04], 5.0).unwrap()
    }

    #[test]
    fn test_empty_curve_is_undefined() {
        let curve = PiecewiseFlatCurve::new();

        assert!(curve.is_empty());
        assert_eq!(curve.back(), None);
        assert_eq!(curve.last_time(), 0.0);
        assert!(curve.forward(1.0).is_nan());
        assert!(curve.discount(1.0).is_nan());
        assert_eq!(curve.integral(0.0), 0.0);
    }

    #[test]
    fn test_constant_curve() {
        let curve = PiecewiseFlatCurve::constant(0.03);

        assert!(curve.is_empty());
        assert_relative_eq!(curve.forward(10.0), 0.03);
        assert_relative_eq!(curve.spot(4.0), 0.03);
        assert_relative_eq!(curve.discount(2.0), (-0.06_f64).exp());
    }

    #[test]
    fn test_knot_belongs_to_segment_it_ends() {
        let curve = three_knots();

        assert_eq!(curve.forward(0.0), 0.02);
        assert_eq!(curve.forward(1.0), 0.02);
        assert_eq!(curve.forward(1.0 + 1e-12), 0.03);
        assert_eq!(curve.forward(2.0), 0.03);
        assert_eq!(curve.forward(3.0), 0.04);
    }

    #[test]
    fn test_integral_accumulates_segments() {
        let curve = three_knots();

        assert_abs_diff_eq!(curve.integral(0.5), 0.01, epsilon = 1e-15);
        assert_abs_diff_eq!(curve.integral(1.0), 0.02, epsilon = 1e-15);
        assert_abs_diff_eq!(curve.integral(1.5), 0.035, epsilon = 1e-15);
        assert_abs_diff_eq!(curve.integral(3.0), 0.09, epsilon = 1e-15);
    }

    #[test]
    fn test_stored_extrapolation() {
        let curve = three_knots();

        assert_eq!(curve.forward(3.5), 5.0);
        assert_eq!(curve.integral(3.5), curve.integral(3.0) + 5.0 * 0.5);
    }

    #[test]
    fn test_call_site_extrapolation() {
        let mut curve = three_knots();
        curve.set_extrapolation_rate(f64::NAN);
        let ext = Some(Extrapolation::new(3.0, 5.0));

        assert!(curve.forward(3.5).is_nan());
        assert_eq!(curve.value_with(3.5, ext), 5.0);
        assert_eq!(curve.integral_with(3.5, ext), curve.integral(3.0) + 5.0 * 0.5);

        // A horizon inside the knots overrides the stored segments.
        let early = Some(Extrapolation::new(1.0, 0.10));
        assert_eq!(curve.value_with(2.5, early), 0.10);
        assert_abs_diff_eq!(curve.integral_with(2.0, early), 0.12, epsilon = 1e-15);
    }

    #[test]
    fn test_spot() {
        let curve = three_knots();

        assert_abs_diff_eq!(curve.spot(2.0), 0.025, epsilon = 1e-15);
        assert_eq!(curve.spot(0.0), 0.02);
        assert!(curve.spot(-1.0).is_nan());
    }

    #[test]
    fn test_push_and_back() {
        let mut curve = PiecewiseFlatCurve::new();
        curve.push(0.5, 0.01);
        curve.push(1.5, 0.02);

        assert_eq!(curve.len(), 2);
        assert_eq!(curve.back(), Some((1.5, 0.02)));
        assert_eq!(curve.last_time(), 1.5);
        assert_eq!(curve.knots().collect::<Vec<_>>(), vec![(0.5, 0.01), (1.5, 0.02)]);
    }

    #[test]
    fn test_try_push_rejects_bad_times() {
        let mut curve = three_knots();

        assert_eq!(
            curve.try_push(3.0, 0.05),
            Err(CurveError::non_monotonic(3, 3.0, 3.0))
        );
        assert_eq!(
            curve.try_push(2.5, 0.05),
            Err(CurveError::non_monotonic(3, 3.0, 2.5))
        );
        assert!(matches!(
            PiecewiseFlatCurve::new().try_push(0.0, 0.01),
            Err(CurveError::InvalidKnotTime { .. })
        ));
        assert!(matches!(
            PiecewiseFlatCurve::new().try_push(f64::INFINITY, 0.01),
            Err(CurveError::InvalidKnotTime { .. })
        ));
        assert_eq!(curve.len(), 3);
    }

    #[test]
    #[should_panic(expected = "Non-monotonic knot")]
    fn test_push_panics_on_non_increasing_time() {
        let mut curve = three_knots();
        curve.push(2.0, 0.05);
    }

    #[test]
    fn test_from_knots_length_mismatch() {
        let err = PiecewiseFlatCurve::from_knots(vec![1.0, 2.0], vec![0.01], f64::NAN).unwrap_err();
        assert_eq!(err, CurveError::LengthMismatch { times: 2, rates: 1 });
    }

    #[test]
    fn test_equality() {
        let a = PiecewiseFlatCurve::from_knots(vec![1.0], vec![0.02], f64::NAN).unwrap();
        let mut b = PiecewiseFlatCurve::new();
        b.push(1.0, 0.02);

        assert_eq!(a, b);

        b.set_extrapolation_rate(0.02);
        assert_ne!(a, b);

        let mut c = a.clone();
        c.push(2.0, 0.03);
        assert_ne!(a, c);
    }

    proptest! {
        #[test]
        fn prop_discount_is_exp_of_integral(
            rates in proptest::collection::vec(-0.02_f64..0.15, 1..8),
            u in 0.0_f64..12.0,
        ) {
            let times: Vec<f64> = (1..=rates.len()).map(|i| i as f64).collect();
            let curve = PiecewiseFlatCurve::from_knots(times, rates, 0.04).unwrap();

            prop_assert_eq!(curve.discount(u), (-curve.integral(u)).exp());
        }

        #[test]
        fn prop_integral_non_decreasing_for_non_negative_rates(
            rates in proptest::collection::vec(0.0_f64..0.15, 1..8),
            a in 0.0_f64..10.0,
            b in 0.0_f64..10.0,
        ) {
            let times: Vec<f64> = (1..=rates.len()).map(|i| 0.75 * i as f64).collect();
            let curve = PiecewiseFlatCurve::from_knots(times, rates, 0.02).unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

            prop_assert!(curve.integral(lo) <= curve.integral(hi));
        }

        #[test]
        fn prop_integral_continuous_at_knots(
            rates in proptest::collection::vec(0.0_f64..0.15, 2..8),
        ) {
            let times: Vec<f64> = (1..=rates.len()).map(|i| i as f64).collect();
            let curve = PiecewiseFlatCurve::from_knots(times.clone(), rates, 0.02).unwrap();

            for &t in &times {
                let left = curve.integral(t - 1e-9);
                let right = curve.integral(t + 1e-9);
                prop_assert!((right - left).abs() < 1e-9);
            }
        }
    }
}
