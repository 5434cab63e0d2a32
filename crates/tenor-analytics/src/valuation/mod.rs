//! Valuation of cash-flow streams against a curve.
//!
//! - [`present`], [`duration`], [`convexity`]: the value of an instrument
//!   and its first two derivatives under a parallel shift of the forward
//!   curve
//! - [`yield_rate`]: the flat rate that reprices an instrument
//! - [`oas`]: the spread over a curve that reprices an instrument
//!
//! None of these mutate their inputs. Curve reads outside the curve's domain
//! produce NaN, which propagates into the result.

mod pricing;
mod spreads;
mod yields;

pub use pricing::{convexity, duration, duration_beyond, present};
pub use spreads::{oas, oas_checked, oas_with};
pub use yields::{yield_rate, yield_rate_checked, yield_rate_with};
