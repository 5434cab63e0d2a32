//! # Tenor Curves
//!
//! Forward-rate curves for the Tenor bootstrapping kernel.
//!
//! This crate provides:
//!
//! - **Curve Trait**: [`Curve`], defined by two primitives (forward rate and
//!   its integral) with forward, integral, discount and spot reads derived
//!   from them
//! - **Call-site extrapolation**: every read accepts an optional
//!   [`Extrapolation`] so a stored curve can be queried as if extended,
//!   without copying or mutating it
//! - **Curve Types**: [`PiecewiseFlatCurve`], [`ConstantCurve`],
//!   [`TranslatedCurve`], [`SumCurve`] and the borrowed [`Extended`] view
//!
//! ## Quick Start
//!
//! ```rust
//! use tenor_curves::prelude::*;
//!
//! let mut curve = PiecewiseFlatCurve::new();
//! curve.push(1.0, 0.03);
//! curve.push(2.0, 0.035);
//!
//! // Flat 3% on (0, 1], 3.5% on (1, 2].
//! assert_eq!(curve.forward(1.0), 0.03);
//! assert_eq!(curve.forward(1.5), 0.035);
//!
//! // Beyond the last knot the curve is undefined unless extended.
//! assert!(curve.forward(3.0).is_nan());
//! let view = curve.extended(2.0, 0.04);
//! assert_eq!(view.forward(3.0), 0.04);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::float_cmp)]

pub mod curves;
pub mod error;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curves::{ConstantCurve, Extended, PiecewiseFlatCurve, SumCurve, TranslatedCurve};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::traits::{Curve, Extrapolation, SPOT_THRESHOLD};
}

pub use curves::{ConstantCurve, Extended, PiecewiseFlatCurve, SumCurve, TranslatedCurve};
pub use error::{CurveError, CurveResult};
pub use traits::{Curve, Extrapolation, SPOT_THRESHOLD};
