//! Core trait for forward-rate curves.
//!
//! A [`Curve`] is a function of time built from two primitives, the forward
//! rate and its integral from zero. Everything else (discount factors, spot
//! rates, extrapolation) is derived here once, so every implementation gets
//! the same domain checks and the same extrapolation composition.

use crate::curves::{Extended, TranslatedCurve};

/// Spot queries below this time fall back to the forward rate instead of
/// dividing the integral by a vanishing time. Equal to `√ε`.
pub const SPOT_THRESHOLD: f64 = 1.490_116_119_384_765_6e-8;

/// Call-site extrapolation: beyond `horizon`, the forward rate is `rate`.
///
/// Extrapolation is an argument of each read, not a property of the stored
/// curve, so different callers can extend the same curve differently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrapolation {
    /// Time after which the flat `rate` applies.
    pub horizon: f64,
    /// Forward rate used beyond `horizon`.
    pub rate: f64,
}

impl Extrapolation {
    /// Creates a new extrapolation.
    #[must_use]
    pub fn new(horizon: f64, rate: f64) -> Self {
        Self { horizon, rate }
    }
}

/// The core trait for forward-rate curves.
///
/// # Required Methods
///
/// Implementations provide only the primitives, evaluated for `u >= 0`:
/// - [`raw_value`](Curve::raw_value): the instantaneous forward rate at `u`
/// - [`raw_integral`](Curve::raw_integral): `∫₀ᵘ f(s) ds`
///
/// # Derived Methods
///
/// - [`value_with`](Curve::value_with), [`integral_with`](Curve::integral_with),
///   [`discount_with`](Curve::discount_with), [`spot_with`](Curve::spot_with):
///   reads under an optional [`Extrapolation`]
/// - [`value`](Curve::value), [`forward`](Curve::forward),
///   [`integral`](Curve::integral), [`discount`](Curve::discount),
///   [`spot`](Curve::spot): the same reads without extrapolation
///
/// All derived reads return NaN for negative (or NaN) times and satisfy
/// `discount(u) == exp(-integral(u))` exactly.
pub trait Curve {
    /// Forward rate at `u >= 0`, using the curve's own semantics beyond its
    /// data.
    fn raw_value(&self, u: f64) -> f64;

    /// Integral of the forward rate over `[0, u]` for `u >= 0`.
    fn raw_integral(&self, u: f64) -> f64;

    /// Forward rate at `u`, switching to `ext.rate` beyond `ext.horizon`.
    fn value_with(&self, u: f64, ext: Option<Extrapolation>) -> f64 {
        if !(u >= 0.0) {
            return f64::NAN;
        }
        match ext {
            Some(e) if u > e.horizon => e.rate,
            _ => self.raw_value(u),
        }
    }

    /// Integral of the forward rate over `[0, u]`, extended flat at
    /// `ext.rate` beyond `ext.horizon`.
    fn integral_with(&self, u: f64, ext: Option<Extrapolation>) -> f64 {
        if !(u >= 0.0) {
            return f64::NAN;
        }
        if u == 0.0 {
            return 0.0;
        }
        match ext {
            Some(e) if u > e.horizon => {
                self.integral_with(e.horizon, None) + e.rate * (u - e.horizon)
            }
            _ => self.raw_integral(u),
        }
    }

    /// Discount factor `exp(-integral(u))`.
    fn discount_with(&self, u: f64, ext: Option<Extrapolation>) -> f64 {
        (-self.integral_with(u, ext)).exp()
    }

    /// Continuously-compounded spot rate: the average forward over `[0, u]`.
    fn spot_with(&self, u: f64, ext: Option<Extrapolation>) -> f64 {
        if u < SPOT_THRESHOLD {
            self.value_with(u, ext)
        } else {
            self.integral_with(u, ext) / u
        }
    }

    /// Forward rate at `u`.
    fn value(&self, u: f64) -> f64 {
        self.value_with(u, None)
    }

    /// Forward rate at `u`. Alias of [`value`](Curve::value).
    fn forward(&self, u: f64) -> f64 {
        self.value_with(u, None)
    }

    /// Integral of the forward rate over `[0, u]`.
    fn integral(&self, u: f64) -> f64 {
        self.integral_with(u, None)
    }

    /// Discount factor at `u`.
    fn discount(&self, u: f64) -> f64 {
        self.discount_with(u, None)
    }

    /// Spot rate at `u`.
    fn spot(&self, u: f64) -> f64 {
        self.spot_with(u, None)
    }

    /// Borrows this curve as if extended flat at `rate` beyond `horizon`.
    fn extended(&self, horizon: f64, rate: f64) -> Extended<&Self>
    where
        Self: Sized,
    {
        Extended::new(self, Extrapolation::new(horizon, rate))
    }

    /// Borrows this curve with `spread` added to every forward rate.
    fn translated(&self, spread: f64) -> TranslatedCurve<&Self>
    where
        Self: Sized,
    {
        TranslatedCurve::new(self, spread)
    }
}

impl<C: Curve + ?Sized> Curve for &C {
    fn raw_value(&self, u: f64) -> f64 {
        (**self).raw_value(u)
    }

    fn raw_integral(&self, u: f64) -> f64 {
        (**self).raw_integral(u)
    }
}

impl<C: Curve + ?Sized> Curve for Box<C> {
    fn raw_value(&self, u: f64) -> f64 {
        (**self).raw_value(u)
    }

    fn raw_integral(&self, u: f64) -> f64 {
        (**self).raw_integral(u)
    }
}
