//! Curve implementations.
//!
//! - [`PiecewiseFlatCurve`]: ordered knots, flat forward between them
//! - [`ConstantCurve`]: one flat forward rate everywhere
//! - [`TranslatedCurve`]: a base curve shifted by a constant spread
//! - [`SumCurve`]: pointwise sum of two curves
//! - [`Extended`]: a borrowed view of a curve under a fixed extrapolation

mod constant;
mod extended;
mod piecewise_flat;
mod translated;

pub use constant::ConstantCurve;
pub use extended::Extended;
pub use piecewise_flat::PiecewiseFlatCurve;
pub use translated::{SumCurve, TranslatedCurve};
