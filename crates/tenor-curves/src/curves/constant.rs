//! Flat forward curve.

use crate::traits::Curve;

/// A curve with the same forward rate at every time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantCurve {
    rate: f64,
}

impl ConstantCurve {
    /// Creates a flat curve at `rate`.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Returns the flat rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Curve for ConstantCurve {
    fn raw_value(&self, _u: f64) -> f64 {
        self.rate
    }

    fn raw_integral(&self, u: f64) -> f64 {
        self.rate * u
    }
}
