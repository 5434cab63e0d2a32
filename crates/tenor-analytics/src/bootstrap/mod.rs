//! Sequential curve bootstrapping.
//!
//! Instruments are calibrated one at a time, in order of maturity. Each one
//! adds a single knot at its maturity whose flat forward rate makes the
//! instrument reprice exactly, with every earlier knot held fixed.
//!
//! ```text
//! for (instrument, price) in inputs:
//!     h   = last knot time (0 if empty)
//!     u   = instrument maturity            (must exceed h)
//!     f   = root of present(instrument, curve extended at f beyond h) - price
//!     push knot (u, f)
//! ```
//!
//! An instrument that cannot be calibrated yields a NaN rate in the
//! [`BootstrapResult`] and adds no knot; later instruments continue from the
//! last good knot.

mod config;
mod report;
mod sequential;

pub use config::{BootstrapConfig, DEFAULT_FALLBACK_GUESS, DEFAULT_REPRICING_TOLERANCE};
pub use report::{
    BootstrapResult, CalibrationStatus, KnotCalibration, RepricingCheck, RepricingReport,
};
pub use sequential::{bootstrap, Bootstrapper};
