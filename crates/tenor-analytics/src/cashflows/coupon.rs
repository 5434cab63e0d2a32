//! Lazily generated fixed-coupon cash flows.

use super::{CashFlow, Instrument};
use crate::error::{AnalyticsError, AnalyticsResult};

/// Period counts closer than this to an integer are treated as whole.
const PERIOD_SNAP: f64 = 1e-9;

/// A bullet bond paying a fixed coupon.
///
/// Coupons fall every `1 / frequency` years counting back from maturity,
/// so a first period that does not divide evenly becomes a short stub.
/// Each coupon pays `notional * rate / frequency`; the notional is repaid
/// with the final coupon. Nothing is stored per flow: the schedule is
/// produced on demand by [`CouponStream`].
///
/// # Example
///
/// ```rust
/// use tenor_analytics::cashflows::{FixedCoupon, Instrument};
///
/// let bond = FixedCoupon::new(0.05, 2.0, 2.0).with_notional(100.0);
/// let flows: Vec<_> = bond.cash_flows().collect();
///
/// assert_eq!(flows.len(), 4);
/// assert_eq!(flows[0].time, 0.5);
/// assert_eq!(flows[3].amount, 102.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCoupon {
    rate: f64,
    maturity: f64,
    frequency: f64,
    notional: f64,
}

impl FixedCoupon {
    /// Creates a unit-notional bond.
    ///
    /// # Panics
    ///
    /// Panics if `maturity` or `frequency` is not positive and finite.
    #[must_use]
    pub fn new(rate: f64, maturity: f64, frequency: f64) -> Self {
        match Self::try_new(rate, maturity, frequency) {
            Ok(bond) => bond,
            Err(err) => panic!("FixedCoupon::new: {err}"),
        }
    }

    /// Creates a unit-notional bond, validating its terms.
    pub fn try_new(rate: f64, maturity: f64, frequency: f64) -> AnalyticsResult<Self> {
        if !(maturity.is_finite() && maturity > 0.0) {
            return Err(AnalyticsError::invalid_input(format!(
                "maturity must be positive and finite, got {maturity}"
            )));
        }
        if !(frequency.is_finite() && frequency > 0.0) {
            return Err(AnalyticsError::invalid_input(format!(
                "frequency must be positive and finite, got {frequency}"
            )));
        }
        if !rate.is_finite() {
            return Err(AnalyticsError::invalid_input(format!(
                "coupon rate must be finite, got {rate}"
            )));
        }
        Ok(Self {
            rate,
            maturity,
            frequency,
            notional: 1.0,
        })
    }

    /// Sets the notional.
    #[must_use]
    pub fn with_notional(mut self, notional: f64) -> Self {
        self.notional = notional;
        self
    }

    /// Annual coupon rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Coupons per year.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Amount repaid at maturity.
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Amount of each coupon.
    pub fn coupon_amount(&self) -> f64 {
        self.notional * self.rate / self.frequency
    }

    /// Number of coupon dates strictly after time zero.
    pub fn periods(&self) -> u32 {
        let periods = self.maturity * self.frequency;
        let whole = periods.round();
        let count = if (periods - whole).abs() < PERIOD_SNAP {
            whole as u32
        } else {
            periods.ceil() as u32
        };
        // Maturity is always a payment date.
        count.max(1)
    }

    /// Returns a stream positioned on the first cash flow.
    pub fn stream(&self) -> CouponStream {
        CouponStream {
            bond: *self,
            remaining: self.periods(),
        }
    }
}

impl Instrument for FixedCoupon {
    fn cash_flows(&self) -> impl Iterator<Item = CashFlow> + '_ {
        self.stream()
    }

    fn maturity(&self) -> Option<f64> {
        Some(self.maturity)
    }
}

/// Pull-based generator over a [`FixedCoupon`]'s cash flows.
///
/// The stream is a cursor: [`has_more`](Self::has_more) reports whether a
/// flow is available, [`current`](Self::current) reads it without moving,
/// and [`advance`](Self::advance) steps to the next one. It is also an
/// ordinary [`Iterator`].
#[derive(Debug, Clone)]
pub struct CouponStream {
    bond: FixedCoupon,
    /// Flows left including the current one. The current flow is paid
    /// `remaining - 1` periods before maturity.
    remaining: u32,
}

impl CouponStream {
    /// Returns true if the stream is positioned on a cash flow.
    pub fn has_more(&self) -> bool {
        self.remaining > 0
    }

    /// The cash flow under the cursor.
    pub fn current(&self) -> Option<CashFlow> {
        if !self.has_more() {
            return None;
        }
        let periods_before_maturity = f64::from(self.remaining - 1);
        let time = self.bond.maturity - periods_before_maturity / self.bond.frequency;
        let mut amount = self.bond.coupon_amount();
        if self.remaining == 1 {
            amount += self.bond.notional;
        }
        Some(CashFlow::new(time, amount))
    }

    /// Moves the cursor to the next cash flow. Does nothing once exhausted.
    pub fn advance(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

impl Iterator for CouponStream {
    type Item = CashFlow;

    fn next(&mut self) -> Option<CashFlow> {
        let cf = self.current()?;
        self.advance();
        Some(cf)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CouponStream {}
