//! Present value and parallel-shift sensitivities.
//!
//! With `P(s) = Σ cᵢ · D(uᵢ) · exp(-s · uᵢ)` for a parallel shift `s` of
//! the forward curve:
//!
//! ```text
//! present   = P(0)   = Σ cᵢ · D(uᵢ)
//! duration  = P'(0)  = Σ -uᵢ · cᵢ · D(uᵢ)
//! convexity = P''(0) = Σ uᵢ² · cᵢ · D(uᵢ)
//! ```
//!
//! These are exact derivatives of the same sum, which is what lets Newton
//! use them without finite-difference noise.

use tenor_curves::Curve;

use crate::cashflows::Instrument;

/// Present value: `Σ c · discount(u)`.
///
/// An instrument without cash flows is worth zero.
///
/// # Example
///
/// ```rust
/// use tenor_analytics::cashflows::CashFlow;
/// use tenor_analytics::valuation::present;
/// use tenor_curves::ConstantCurve;
///
/// let zero = vec![CashFlow::new(2.0, 100.0)];
/// let pv = present(&zero, &ConstantCurve::new(0.05));
///
/// assert!((pv - 100.0 * (-0.1_f64).exp()).abs() < 1e-12);
/// ```
pub fn present<I, C>(instrument: &I, curve: &C) -> f64
where
    I: Instrument + ?Sized,
    C: Curve + ?Sized,
{
    instrument
        .cash_flows()
        .map(|cf| cf.amount * curve.discount(cf.time))
        .sum()
}

/// Derivative of [`present`] with respect to a parallel shift of the
/// forward curve: `Σ -u · c · discount(u)`.
///
/// Negative for positive cash flows.
pub fn duration<I, C>(instrument: &I, curve: &C) -> f64
where
    I: Instrument + ?Sized,
    C: Curve + ?Sized,
{
    instrument
        .cash_flows()
        .map(|cf| -cf.time * cf.amount * curve.discount(cf.time))
        .sum()
}

/// Second derivative of [`present`] with respect to a parallel shift:
/// `Σ u² · c · discount(u)`.
pub fn convexity<I, C>(instrument: &I, curve: &C) -> f64
where
    I: Instrument + ?Sized,
    C: Curve + ?Sized,
{
    instrument
        .cash_flows()
        .map(|cf| cf.time * cf.time * cf.amount * curve.discount(cf.time))
        .sum()
}

/// Derivative of [`present`] with respect to the forward rate beyond
/// `horizon` only: `Σ -(u - horizon)⁺ · c · discount(u)`.
///
/// When `curve` is extended flat at rate `f` past `horizon`, this is
/// `∂ present / ∂f`. Flows at or before `horizon` do not move. With a zero
/// horizon it equals [`duration`].
pub fn duration_beyond<I, C>(instrument: &I, curve: &C, horizon: f64) -> f64
where
    I: Instrument + ?Sized,
    C: Curve + ?Sized,
{
    instrument
        .cash_flows()
        .filter(|cf| cf.time > horizon)
        .map(|cf| -(cf.time - horizon) * cf.amount * curve.discount(cf.time))
        .sum()
}
