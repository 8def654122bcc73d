#![forbid(unsafe_code)]

//! Shared runtime pieces for the fsv workspace.
//!
//! ## Module layout
//!
//! | Module | Contents                                        |
//! |--------|-------------------------------------------------|
//! | `mode` | [`RuntimeMode`] enum (Strict / Hardened)        |
//!
//! The crate root also carries the oracle case log and the float assertion
//! helpers used by the test suites in the workspace.

pub mod mode;

pub use mode::RuntimeMode;

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch, or 0 if the clock is before it.
#[must_use]
pub fn now_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

// ═══════════════════════════════════════════════════════════════════
// Test Helpers — oracle case logging and float assertions
// ═══════════════════════════════════════════════════════════════════

/// Outcome of one oracle case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseOutcome {
    Pass,
    Fail,
}

/// Accumulates the comparisons of one oracle case and reports them as a
/// single JSON line on stderr.
///
/// ```rust
/// use fsv_runtime::{CaseOutcome, OracleCaseLog};
///
/// let mut case = OracleCaseLog::new("mean_of_square", "unit_square", 1e-12);
/// case.record((0.5, 0.5), (0.5, 0.5));
/// assert_eq!(case.outcome, CaseOutcome::Pass);
/// case.finish();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleCaseLog {
    pub case_id: String,
    pub fixture: String,
    pub mode: RuntimeMode,
    pub timestamp_ms: u64,
    pub tolerance: f64,
    pub comparisons: usize,
    /// Largest component-wise deviation seen; infinite once a NaN shows up.
    pub max_abs_error: f64,
    pub outcome: CaseOutcome,
}

impl OracleCaseLog {
    #[must_use]
    pub fn new(case_id: impl Into<String>, fixture: impl Into<String>, tolerance: f64) -> Self {
        Self {
            case_id: case_id.into(),
            fixture: fixture.into(),
            mode: RuntimeMode::Strict,
            timestamp_ms: now_unix_ms(),
            tolerance,
            comparisons: 0,
            max_abs_error: 0.0,
            outcome: CaseOutcome::Pass,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: RuntimeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Compares one `(re, im)` pair against its oracle; returns whether it held.
    pub fn record(&mut self, actual: (f64, f64), expected: (f64, f64)) -> bool {
        let error = (actual.0 - expected.0)
            .abs()
            .max((actual.1 - expected.1).abs());
        let error = if error.is_nan() { f64::INFINITY } else { error };
        self.comparisons += 1;
        self.max_abs_error = self.max_abs_error.max(error);
        let held = error <= self.tolerance;
        if !held {
            self.outcome = CaseOutcome::Fail;
        }
        held
    }

    #[must_use]
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }

    /// Emits the case line and fails the calling test if any comparison missed.
    pub fn finish(self) {
        eprintln!("{}", self.to_json_line());
        assert_eq!(
            self.outcome,
            CaseOutcome::Pass,
            "oracle case {} on {} exceeded tolerance {}: max_abs_error={} over {} comparisons",
            self.case_id,
            self.fixture,
            self.tolerance,
            self.max_abs_error,
            self.comparisons
        );
    }
}

/// Assert two f64 values are close within combined absolute and relative tolerance.
///
/// Uses the formula: |actual - expected| <= atol + rtol * |expected|
pub fn assert_close(actual: f64, expected: f64, atol: f64, rtol: f64) {
    let tol = atol + rtol * expected.abs();
    assert!(
        (actual - expected).abs() <= tol,
        "assert_close failed: actual={actual} expected={expected} diff={} tol={tol} (atol={atol}, rtol={rtol})",
        (actual - expected).abs()
    );
}

/// Assert two `(re, im)` pairs are component-wise close.
pub fn assert_close_pair(actual: (f64, f64), expected: (f64, f64), atol: f64) {
    assert!(
        (actual.0 - expected.0).abs() <= atol && (actual.1 - expected.1).abs() <= atol,
        "assert_close_pair failed: actual={actual:?} expected={expected:?} atol={atol}"
    );
}

/// Check if a value is within tolerance of expected.
#[must_use]
pub fn within_tolerance(actual: f64, expected: f64, atol: f64, rtol: f64) -> bool {
    let tol = atol + rtol * expected.abs();
    (actual - expected).abs() <= tol
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_is_the_default_mode() {
        assert_eq!(RuntimeMode::default(), RuntimeMode::Strict);
        assert!(!RuntimeMode::Strict.rejects_non_finite());
        assert!(RuntimeMode::Hardened.rejects_non_finite());
    }

    #[test]
    fn case_log_tracks_worst_deviation() {
        let mut case = OracleCaseLog::new("c1_of_square", "unit_square", 1e-9);
        assert!(case.record((-0.5, -0.5), (-0.5, -0.5)));
        assert!(case.record((1.0 + 1e-10, 0.0), (1.0, 0.0)));
        assert_eq!(case.comparisons, 2);
        assert!(case.max_abs_error > 0.0 && case.max_abs_error < 1e-9);
        assert_eq!(case.outcome, CaseOutcome::Pass);
    }

    #[test]
    fn case_log_fails_on_miss_and_nan() {
        let mut case = OracleCaseLog::new("tone", "pure_tone", 1e-12);
        assert!(!case.record((1.1, 0.0), (1.0, 0.0)));
        assert_eq!(case.outcome, CaseOutcome::Fail);

        let mut case = OracleCaseLog::new("nan", "pure_tone", 1e-12);
        assert!(!case.record((f64::NAN, 0.0), (1.0, 0.0)));
        assert_eq!(case.max_abs_error, f64::INFINITY);
    }

    #[test]
    #[should_panic(expected = "exceeded tolerance")]
    fn finish_panics_on_failed_case() {
        let mut case = OracleCaseLog::new("miss", "unit_square", 1e-12);
        case.record((0.0, 1.0), (0.0, 0.0));
        case.finish();
    }

    #[test]
    fn case_log_serializes_to_json() {
        let mut case = OracleCaseLog::new("hardened_mean", "constant_signal", 1e-12)
            .with_mode(RuntimeMode::Hardened);
        case.record((2.0, 0.0), (2.0, 0.0));
        let parsed: serde_json::Value =
            serde_json::from_str(&case.to_json_line()).expect("valid JSON");
        assert_eq!(parsed["case_id"], "hardened_mean");
        assert_eq!(parsed["mode"], "Hardened");
        assert_eq!(parsed["outcome"], "pass");
        assert_eq!(parsed["comparisons"], 1);
    }

    #[test]
    fn within_tolerance_combines_abs_and_rel() {
        assert!(within_tolerance(1.0 + 1e-10, 1.0, 1e-9, 0.0));
        assert!(within_tolerance(101.0, 100.0, 0.0, 0.011));
        assert!(!within_tolerance(1.1, 1.0, 1e-3, 1e-3));
        assert_close(2.0, 2.0 + 1e-13, 1e-12, 0.0);
        assert_close_pair((0.5, -0.5), (0.5 + 1e-14, -0.5), 1e-12);
    }
}
