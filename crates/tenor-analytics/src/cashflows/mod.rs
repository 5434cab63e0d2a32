//! Cash flows and the instruments that produce them.
//!
//! Valuation and bootstrapping only need an ordered stream of
//! [`CashFlow`]s. Anything that can produce one is an [`Instrument`]:
//!
//! - a plain slice or `Vec` of cash flows
//! - a validated [`Schedule`]
//! - a [`FixedCoupon`] bond, whose flows are generated lazily by a
//!   [`CouponStream`]
//!
//! Times are year fractions from the curve origin. Day counts and calendars
//! are applied before cash flows reach this crate.

mod coupon;
mod schedule;

pub use coupon::{CouponStream, FixedCoupon};
pub use schedule::Schedule;

use serde::{Deserialize, Serialize};

/// A single payment: `amount` paid at `time` years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment time in years.
    pub time: f64,
    /// Payment amount, in the same units as prices.
    pub amount: f64,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(time: f64, amount: f64) -> Self {
        Self { time, amount }
    }
}

impl From<(f64, f64)> for CashFlow {
    fn from((time, amount): (f64, f64)) -> Self {
        Self::new(time, amount)
    }
}

/// A source of time-ascending cash flows.
///
/// The stream is forward-only and may be generated on demand. It is
/// requested afresh for every pass, so an instrument can be valued any
/// number of times.
pub trait Instrument {
    /// Returns the cash flows in ascending time order.
    fn cash_flows(&self) -> impl Iterator<Item = CashFlow> + '_;

    /// Time of the final cash flow, or `None` if there are no cash flows.
    fn maturity(&self) -> Option<f64> {
        self.cash_flows().last().map(|cf| cf.time)
    }
}

impl Instrument for [CashFlow] {
    fn cash_flows(&self) -> impl Iterator<Item = CashFlow> + '_ {
        self.iter().copied()
    }

    fn maturity(&self) -> Option<f64> {
        self.last().map(|cf| cf.time)
    }
}

impl Instrument for Vec<CashFlow> {
    fn cash_flows(&self) -> impl Iterator<Item = CashFlow> + '_ {
        self.iter().copied()
    }

    fn maturity(&self) -> Option<f64> {
        self.last().map(|cf| cf.time)
    }
}

impl<I: Instrument + ?Sized> Instrument for &I {
    fn cash_flows(&self) -> impl Iterator<Item = CashFlow> + '_ {
        (**self).cash_flows()
    }

    fn maturity(&self) -> Option<f64> {
        (**self).maturity()
    }
}
