//! Curve transformations.
//!
//! - [`TranslatedCurve`]: adds a constant spread to every forward rate
//! - [`SumCurve`]: adds the forward rates of two curves
//!
//! Both are generic over how they hold their inputs, so they can own them
//! or borrow them (`&C` is itself a [`Curve`]).

use crate::traits::Curve;

/// A curve shifted by a constant additive spread.
///
/// Forwards become `f(u) + spread` and the integral gains `spread · u`,
/// which scales every discount factor by `exp(-spread · u)`. This is the
/// shifted curve used for OAS and parallel-shift sensitivities.
///
/// # Example
///
/// ```rust
/// use tenor_curves::{ConstantCurve, Curve, TranslatedCurve};
///
/// let base = ConstantCurve::new(0.03);
/// let shifted = TranslatedCurve::new(&base, 0.005);
///
/// assert!((shifted.forward(2.0) - 0.035).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TranslatedCurve<C> {
    base: C,
    spread: f64,
}

impl<C> TranslatedCurve<C> {
    /// Creates a new translated curve.
    ///
    /// # Arguments
    ///
    /// * `base` - The underlying curve
    /// * `spread` - The spread to add (as decimal, e.g., 0.01 for 100 bps)
    #[must_use]
    pub fn new(base: C, spread: f64) -> Self {
        Self { base, spread }
    }

    /// Returns the spread applied to this curve.
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// Returns a reference to the base curve.
    pub fn base(&self) -> &C {
        &self.base
    }
}

impl<C: Curve> Curve for TranslatedCurve<C> {
    fn raw_value(&self, u: f64) -> f64 {
        self.base.raw_value(u) + self.spread
    }

    fn raw_integral(&self, u: f64) -> f64 {
        self.base.raw_integral(u) + self.spread * u
    }
}

/// The pointwise sum of two curves.
#[derive(Debug, Clone, Copy)]
pub struct SumCurve<A, B> {
    first: A,
    second: B,
}

impl<A, B> SumCurve<A, B> {
    /// Creates the sum of `first` and `second`.
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns the first summand.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Returns the second summand.
    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A: Curve, B: Curve> Curve for SumCurve<A, B> {
    fn raw_value(&self, u: f64) -> f64 {
        self.first.raw_value(u) + self.second.raw_value(u)
    }

    fn raw_integral(&self, u: f64) -> f64 {
        self.first.raw_integral(u) + self.second.raw_integral(u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{ConstantCurve, PiecewiseFlatCurve};
    use approx::assert_relative_eq;

    fn sample_curve() -> PiecewiseFlatCurve {
        PiecewiseFlatCurve::from_knots(vec![1.0, 2.0, 5.0], vec![0.02, 0.03, 0.04], f64::NAN)
            .unwrap()
    }

    #[test]
    fn test_translation_shifts_forwards_and_discounts() {
        let base = sample_curve();
        let shifted = base.translated(0.01);

        assert_relative_eq!(shifted.forward(1.5), 0.04, epsilon = 1e-15);
        assert_relative_eq!(shifted.integral(3.0), base.integral(3.0) + 0.03, epsilon = 1e-15);
        assert_relative_eq!(
            shifted.discount(3.0),
            base.discount(3.0) * (-0.03_f64).exp(),
            max_relative = 1e-14
        );
        assert_relative_eq!(shifted.spread(), 0.01);
    }

    #[test]
    fn test_translation_keeps_domain_checks() {
        let shifted = TranslatedCurve::new(ConstantCurve::new(0.02), 0.01);

        assert!(shifted.forward(-1.0).is_nan());
        assert_eq!(shifted.integral(0.0), 0.0);
    }

    #[test]
    fn test_translated_view_of_extended_curve() {
        let base = sample_curve();
        let view = base.extended(5.0, 0.05);
        let shifted = view.translated(-0.01);

        assert_relative_eq!(shifted.forward(6.0), 0.04, epsilon = 1e-15);
        assert_relative_eq!(
            shifted.integral(6.0),
            base.integral(5.0) + 0.05 - 0.06,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_sum_adds_pointwise() {
        let sum = SumCurve::new(sample_curve(), ConstantCurve::new(0.01));

        assert_relative_eq!(sum.forward(0.5), 0.03, epsilon = 1e-15);
        assert_relative_eq!(sum.forward(4.0), 0.05, epsilon = 1e-15);
        assert_relative_eq!(
            sum.integral(2.0),
            sum.first().integral(2.0) + 0.02,
            epsilon = 1e-15
        );
        assert_relative_eq!(sum.second().rate(), 0.01);
    }
}
