//! Borrowed view of a curve under a fixed extrapolation.

use crate::traits::{Curve, Extrapolation};

/// A curve read as if extended flat at `extrapolation.rate` beyond
/// `extrapolation.horizon`.
///
/// The view holds the base curve (usually by reference) and never modifies
/// it, so a curve under construction can be priced against a trial rate
/// while remaining shared and read-only.
///
/// # Example
///
/// ```rust
/// use tenor_curves::{Curve, PiecewiseFlatCurve};
///
/// let mut curve = PiecewiseFlatCurve::new();
/// curve.push(1.0, 0.02);
///
/// let trial = curve.extended(1.0, 0.03);
/// assert!((trial.integral(2.0) - 0.05).abs() < 1e-15);
/// assert_eq!(curve.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Extended<C> {
    base: C,
    extrapolation: Extrapolation,
}

impl<C> Extended<C> {
    /// Creates a view of `base` under `extrapolation`.
    #[must_use]
    pub fn new(base: C, extrapolation: Extrapolation) -> Self {
        Self {
            base,
            extrapolation,
        }
    }

    /// Returns the extrapolation applied by this view.
    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    /// Returns the underlying curve.
    pub fn base(&self) -> &C {
        &self.base
    }
}

impl<C: Curve> Curve for Extended<C> {
    fn raw_value(&self, u: f64) -> f64 {
        self.base.value_with(u, Some(self.extrapolation))
    }

    fn raw_integral(&self, u: f64) -> f64 {
        self.base.integral_with(u, Some(self.extrapolation))
    }
}
