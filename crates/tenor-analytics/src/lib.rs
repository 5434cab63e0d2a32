//! # Tenor Analytics
//!
//! Valuation and curve bootstrapping on top of `tenor-curves` and
//! `tenor-math`.
//!
//! This crate provides:
//! - **Cash Flows**: [`CashFlow`], the [`Instrument`] trait, validated
//!   [`Schedule`]s and lazily generated [`FixedCoupon`] bonds
//! - **Valuation**: present value, duration and convexity under a parallel
//!   shift, flat yield and option-adjusted spread
//! - **Bootstrap**: sequential calibration of a [`PiecewiseFlatCurve`] to
//!   priced instruments, with a repricing audit
//!
//! ## Failure model
//!
//! Numerical routines fail softly: a solve that does not converge returns
//! NaN, and NaN propagates through every downstream sum. Each such routine
//! has a `_checked` or `_strict` companion returning [`AnalyticsResult`].
//!
//! ## Usage
//!
//! ```rust
//! use tenor_analytics::prelude::*;
//! use tenor_curves::Curve;
//!
//! let instruments = vec![
//!     FixedCoupon::new(0.03, 1.0, 2.0),
//!     FixedCoupon::new(0.035, 2.0, 2.0),
//!     FixedCoupon::new(0.04, 5.0, 2.0),
//! ];
//! let prices = [1.0, 1.0, 1.0];
//!
//! let result = Bootstrapper::new(BootstrapConfig::default()).bootstrap(&instruments, &prices);
//! assert!(result.is_valid());
//!
//! // Par bonds reprice at par on the bootstrapped curve.
//! let curve = result.into_curve();
//! assert!((present(&instruments[2], &curve) - 1.0).abs() < 1e-8);
//! ```
//!
//! [`PiecewiseFlatCurve`]: tenor_curves::PiecewiseFlatCurve

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod bootstrap;
pub mod cashflows;
pub mod error;
pub mod valuation;

pub use bootstrap::{bootstrap, BootstrapConfig, BootstrapResult, Bootstrapper};
pub use cashflows::{CashFlow, CouponStream, FixedCoupon, Instrument, Schedule};
pub use error::{AnalyticsError, AnalyticsResult};
pub use valuation::{
    convexity, duration, duration_beyond, oas, oas_checked, oas_with, present, yield_rate,
    yield_rate_checked, yield_rate_with,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use tenor_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bootstrap::{
        bootstrap, BootstrapConfig, BootstrapResult, Bootstrapper, CalibrationStatus,
        KnotCalibration, RepricingCheck, RepricingReport,
    };
    pub use crate::cashflows::{CashFlow, CouponStream, FixedCoupon, Instrument, Schedule};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::valuation::{
        convexity, duration, duration_beyond, oas, oas_checked, oas_with, present, yield_rate,
        yield_rate_checked, yield_rate_with,
    };
}
