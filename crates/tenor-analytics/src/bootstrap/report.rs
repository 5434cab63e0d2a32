//! Bootstrap outcome: per-instrument calibration and repricing audit.

use std::fmt;
use std::time::Duration;

use tenor_curves::PiecewiseFlatCurve;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Why an instrument did or did not produce a knot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalibrationStatus {
    /// A knot was appended.
    Calibrated,
    /// The instrument has no cash flows.
    NoCashFlows,
    /// The instrument's maturity is not a finite time.
    InvalidMaturity,
    /// The instrument matures at or before the last knot.
    NotBeyondFrontier {
        /// Time of the last knot when the instrument was reached.
        frontier: f64,
    },
    /// The root solve did not converge.
    NotConverged,
}

impl fmt::Display for CalibrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calibrated => write!(f, "calibrated"),
            Self::NoCashFlows => write!(f, "instrument has no cash flows"),
            Self::InvalidMaturity => write!(f, "maturity is not a finite time"),
            Self::NotBeyondFrontier { frontier } => {
                write!(f, "maturity does not exceed last knot at {frontier}")
            }
            Self::NotConverged => write!(f, "solver did not converge"),
        }
    }
}

/// Calibration of one input instrument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnotCalibration {
    /// Position of the instrument in the input.
    pub index: usize,
    /// Instrument maturity, the knot time. NaN if it has no cash flows.
    pub maturity: f64,
    /// Calibrated forward rate, NaN on failure.
    pub rate: f64,
    /// Solver iterations used.
    pub iterations: u32,
    /// Pricing error at the final iterate.
    pub residual: f64,
    /// Outcome.
    pub status: CalibrationStatus,
}

impl KnotCalibration {
    pub(crate) fn failed(index: usize, maturity: f64, status: CalibrationStatus) -> Self {
        Self {
            index,
            maturity,
            rate: f64::NAN,
            iterations: 0,
            residual: f64::NAN,
            status,
        }
    }

    /// Returns true if a knot was appended for this instrument.
    pub fn is_calibrated(&self) -> bool {
        self.status == CalibrationStatus::Calibrated
    }
}

/// Repricing of one instrument against the finished curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepricingCheck {
    /// Position of the instrument in the input.
    pub index: usize,
    /// Target price.
    pub target: f64,
    /// Present value on the finished curve.
    pub model: f64,
    /// Absolute error `|model - target|`.
    pub error: f64,
    /// Whether the error is within tolerance.
    pub passed: bool,
}

impl RepricingCheck {
    /// Creates a check. NaN model values never pass.
    #[must_use]
    pub fn new(index: usize, target: f64, model: f64, tolerance: f64) -> Self {
        let error = (model - target).abs();
        Self {
            index,
            target,
            model,
            error,
            passed: error <= tolerance,
        }
    }
}

impl fmt::Display for RepricingCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "✓" } else { "✗" };
        write!(
            f,
            "{} #{} | target: {:.6} | model: {:.6} | error: {:.2e}",
            status, self.index, self.target, self.model, self.error
        )
    }
}

/// Repricing audit of every input instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct RepricingReport {
    checks: Vec<RepricingCheck>,
    tolerance: f64,
}

impl RepricingReport {
    /// Creates a report from individual checks.
    #[must_use]
    pub fn new(checks: Vec<RepricingCheck>, tolerance: f64) -> Self {
        Self { checks, tolerance }
    }

    /// Returns true if every instrument reprices within tolerance.
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Returns the individual checks.
    pub fn checks(&self) -> &[RepricingCheck] {
        &self.checks
    }

    /// Returns the tolerance the checks were made against.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Largest absolute error. NaN if any model value is NaN.
    pub fn max_error(&self) -> f64 {
        self.checks.iter().map(|c| c.error).fold(0.0, |acc, e| {
            if e.is_nan() || acc.is_nan() {
                f64::NAN
            } else {
                acc.max(e)
            }
        })
    }

    /// Root mean square error.
    pub fn rms_error(&self) -> f64 {
        if self.checks.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = self.checks.iter().map(|c| c.error * c.error).sum();
        (sum_sq / self.checks.len() as f64).sqrt()
    }

    /// Number of instruments within tolerance.
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Number of instruments outside tolerance.
    pub fn failed_count(&self) -> usize {
        self.checks.len() - self.passed_count()
    }

    /// Returns the checks that failed.
    pub fn failed_checks(&self) -> Vec<&RepricingCheck> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }
}

impl fmt::Display for RepricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Repricing Report")?;
        writeln!(f, "================")?;
        writeln!(f, "Status: {}", if self.is_valid() { "PASSED" } else { "FAILED" })?;
        writeln!(f, "Instruments: {}/{} passed", self.passed_count(), self.checks.len())?;
        writeln!(f, "Max Error: {:.2e} (tol: {:.2e})", self.max_error(), self.tolerance)?;
        writeln!(f, "RMS Error: {:.2e}", self.rms_error())?;

        if !self.checks.is_empty() {
            writeln!(f)?;
            writeln!(f, "Details:")?;
            for check in &self.checks {
                writeln!(f, "  {check}")?;
            }
        }

        Ok(())
    }
}

/// Result of a bootstrap: the curve plus its audit trail.
///
/// The curve holds one knot per successfully calibrated instrument.
/// Failures are soft: check [`is_valid`](Self::is_valid) or use
/// [`into_curve_strict`](Self::into_curve_strict) before trusting it.
#[derive(Debug, Clone)]
pub struct BootstrapResult {
    /// The bootstrapped curve.
    pub curve: PiecewiseFlatCurve,
    /// One entry per input instrument, in input order.
    pub calibrations: Vec<KnotCalibration>,
    /// Repricing of every input instrument against `curve`.
    pub repricing: RepricingReport,
    /// Time taken to build the curve.
    pub build_duration: Duration,
}

impl BootstrapResult {
    /// Returns true if every instrument calibrated and reprices.
    pub fn is_valid(&self) -> bool {
        self.calibrations.iter().all(KnotCalibration::is_calibrated) && self.repricing.is_valid()
    }

    /// Indices of instruments that produced no knot.
    pub fn failed_instruments(&self) -> Vec<usize> {
        self.calibrations
            .iter()
            .filter(|c| !c.is_calibrated())
            .map(|c| c.index)
            .collect()
    }

    /// Calibrated rate per input instrument, NaN where calibration failed.
    pub fn rates(&self) -> Vec<f64> {
        self.calibrations.iter().map(|c| c.rate).collect()
    }

    /// Returns the curve, whatever its state.
    #[must_use]
    pub fn into_curve(self) -> PiecewiseFlatCurve {
        self.curve
    }

    /// Returns the curve if every instrument calibrated and reprices.
    ///
    /// # Errors
    ///
    /// [`AnalyticsError::BootstrapFailed`] for the first instrument without
    /// a knot, otherwise [`AnalyticsError::RepricingFailed`] if any
    /// instrument misses the repricing tolerance.
    pub fn into_curve_strict(self) -> AnalyticsResult<PiecewiseFlatCurve> {
        if let Some(failed) = self.calibrations.iter().find(|c| !c.is_calibrated()) {
            return Err(AnalyticsError::BootstrapFailed {
                index: failed.index,
                maturity: failed.maturity,
                reason: failed.status.to_string(),
            });
        }
        if !self.repricing.is_valid() {
            return Err(AnalyticsError::RepricingFailed {
                failed: self.repricing.failed_count(),
                max_error: self.repricing.max_error(),
            });
        }
        Ok(self.curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RepricingReport {
        RepricingReport::new(
            vec![
                RepricingCheck::new(0, 1.0, 1.0 + 1e-9, 1e-6),
                RepricingCheck::new(1, 1.0, 1.1, 1e-6),
                RepricingCheck::new(2, 1.0, 1.0, 1e-6),
            ],
            1e-6,
        )
    }

    #[test]
    fn test_report_counts() {
        let report = report();

        assert!(!report.is_valid());
        assert_eq!(report.passed_count(), 2);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.failed_checks()[0].index, 1);
        assert!((report.max_error() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_nan_model_fails() {
        let check = RepricingCheck::new(0, 1.0, f64::NAN, 1e-6);
        assert!(!check.passed);

        let report = RepricingReport::new(vec![check], 1e-6);
        assert!(report.max_error().is_nan());
    }

    #[test]
    fn test_empty_report_is_valid() {
        let report = RepricingReport::new(Vec::new(), 1e-6);

        assert!(report.is_valid());
        assert_eq!(report.max_error(), 0.0);
        assert_eq!(report.rms_error(), 0.0);
    }

    #[test]
    fn test_report_display() {
        let text = report().to_string();

        assert!(text.contains("Status: FAILED"));
        assert!(text.contains("Instruments: 2/3 passed"));
        assert!(text.contains("✗ #1"));
    }

    #[test]
    fn test_strict_names_first_failure() {
        let result = BootstrapResult {
            curve: PiecewiseFlatCurve::new(),
            calibrations: vec![
                KnotCalibration::failed(0, 2.0, CalibrationStatus::NotConverged),
                KnotCalibration::failed(1, f64::NAN, CalibrationStatus::NoCashFlows),
            ],
            repricing: RepricingReport::new(Vec::new(), 1e-6),
            build_duration: Duration::ZERO,
        };

        assert_eq!(result.failed_instruments(), vec![0, 1]);
        assert!(result.rates().iter().all(|r| r.is_nan()));

        let err = result.into_curve_strict().unwrap_err();
        assert!(matches!(err, AnalyticsError::BootstrapFailed { index: 0, .. }));
    }
}
