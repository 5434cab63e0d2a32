//! Validated, materialized cash-flow schedules.

use serde::{Deserialize, Serialize};

use super::{CashFlow, Instrument};
use crate::error::{AnalyticsError, AnalyticsResult};

/// An owned cash-flow schedule with checked ordering.
///
/// Every time is finite and non-negative, times never decrease, and every
/// amount is finite. Several flows may share a time (a coupon and a
/// principal repayment, for instance).
///
/// Deserializing validates, so a `Schedule` read from a file upholds the
/// same invariants as one built in code.
///
/// # Example
///
/// ```rust
/// use tenor_analytics::cashflows::{Instrument, Schedule};
///
/// let bond = Schedule::from_parts(&[0.5, 1.0], &[2.5, 102.5]).unwrap();
/// assert_eq!(bond.maturity(), Some(1.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CashFlow>", into = "Vec<CashFlow>")]
pub struct Schedule {
    flows: Vec<CashFlow>,
}

impl Schedule {
    /// Creates a schedule from ordered cash flows.
    ///
    /// # Panics
    ///
    /// Panics if the flows are out of order or not finite. Use
    /// [`try_new`](Self::try_new) for input that has not been checked.
    #[must_use]
    pub fn new(flows: Vec<CashFlow>) -> Self {
        match Self::try_new(flows) {
            Ok(schedule) => schedule,
            Err(err) => panic!("Schedule::new: {err}"),
        }
    }

    /// Creates a schedule, validating the ordering of the flows.
    pub fn try_new(flows: Vec<CashFlow>) -> AnalyticsResult<Self> {
        let mut previous = 0.0;
        for (i, cf) in flows.iter().enumerate() {
            if !(cf.time.is_finite() && cf.time >= 0.0) {
                return Err(AnalyticsError::invalid_schedule(format!(
                    "cash flow {i} has invalid time {}",
                    cf.time
                )));
            }
            if cf.time < previous {
                return Err(AnalyticsError::invalid_schedule(format!(
                    "cash flow {i} at {} precedes previous flow at {previous}",
                    cf.time
                )));
            }
            if !cf.amount.is_finite() {
                return Err(AnalyticsError::invalid_schedule(format!(
                    "cash flow {i} has invalid amount {}",
                    cf.amount
                )));
            }
            previous = cf.time;
        }
        Ok(Self { flows })
    }

    /// Creates a schedule from parallel time and amount sequences.
    pub fn from_parts(times: &[f64], amounts: &[f64]) -> AnalyticsResult<Self> {
        if times.len() != amounts.len() {
            return Err(AnalyticsError::LengthMismatch {
                times: times.len(),
                amounts: amounts.len(),
            });
        }
        let flows = times
            .iter()
            .zip(amounts)
            .map(|(&time, &amount)| CashFlow::new(time, amount))
            .collect();
        Self::try_new(flows)
    }

    /// A single payment of `amount` at `time`.
    pub fn zero_coupon(time: f64, amount: f64) -> AnalyticsResult<Self> {
        Self::try_new(vec![CashFlow::new(time, amount)])
    }

    /// Returns the cash flows.
    pub fn flows(&self) -> &[CashFlow] {
        &self.flows
    }

    /// Returns the number of cash flows.
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Returns true if the schedule has no cash flows.
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Returns the final cash flow.
    pub fn back(&self) -> Option<CashFlow> {
        self.flows.last().copied()
    }
}

impl TryFrom<Vec<CashFlow>> for Schedule {
    type Error = AnalyticsError;

    fn try_from(flows: Vec<CashFlow>) -> AnalyticsResult<Self> {
        Self::try_new(flows)
    }
}

impl From<Schedule> for Vec<CashFlow> {
    fn from(schedule: Schedule) -> Self {
        schedule.flows
    }
}

impl Instrument for Schedule {
    fn cash_flows(&self) -> impl Iterator<Item = CashFlow> + '_ {
        self.flows.iter().copied()
    }

    fn maturity(&self) -> Option<f64> {
        self.back().map(|cf| cf.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let schedule = Schedule::from_parts(&[1.0, 2.0, 2.0], &[5.0, 5.0, 100.0]).unwrap();

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.back(), Some(CashFlow::new(2.0, 100.0)));
        assert_eq!(schedule.maturity(), Some(2.0));
    }

    #[test]
    fn test_rejects_unsorted_times() {
        let err = Schedule::from_parts(&[2.0, 1.0], &[1.0, 1.0]).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidSchedule(_)));
    }

    #[test]
    fn test_rejects_negative_and_nan() {
        assert!(Schedule::zero_coupon(-1.0, 1.0).is_err());
        assert!(Schedule::zero_coupon(f64::NAN, 1.0).is_err());
        assert!(Schedule::zero_coupon(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = Schedule::from_parts(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::LengthMismatch {
                times: 2,
                amounts: 1
            }
        );
    }

    #[test]
    #[should_panic(expected = "Schedule::new")]
    fn test_new_panics_on_invalid_flows() {
        let _ = Schedule::new(vec![CashFlow::new(3.0, 1.0), CashFlow::new(1.0, 1.0)]);
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = Schedule::default();
        assert!(schedule.is_empty());
        assert_eq!(schedule.maturity(), None);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Schedule =
            serde_json::from_str(r#"[{"time": 1.0, "amount": 1.0}, {"time": 2.0, "amount": 101.0}]"#)
                .unwrap();
        assert_eq!(ok.len(), 2);

        let bad = serde_json::from_str::<Schedule>(
            r#"[{"time": 2.0, "amount": 1.0}, {"time": 1.0, "amount": 101.0}]"#,
        );
        assert!(bad.is_err());
    }
}
