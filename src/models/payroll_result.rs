//! Evaluation result model.

use serde::{Deserialize, Serialize};

/// The complete output of one evaluation: penalty, bonus, the adjusted
/// salary, and the aggregates they were derived from.
///
/// A result is freshly constructed on every evaluation; it has no
/// lifecycle of its own and nothing is cached between calls.
///
/// All monetary and minute figures are IEEE `f64` on purpose: a malformed
/// clock time upstream propagates as NaN all the way into these fields,
/// and the caller must be prepared to display "not a number" rather than
/// a plausible-looking wrong value. When serialized to JSON, NaN fields
/// appear as `null`.
///
/// # The zeroed sentinel
///
/// [`PayrollResult::zeroed`] is the "not enough information to compute"
/// value returned when the configuration is rejected. It is not an error
/// signal. With a valid configuration the fully-zeroed value is
/// unreachable, because zero totals force `adjusted_salary` to equal the
/// (strictly positive) monthly salary. [`PayrollResult::is_zeroed`]
/// therefore unambiguously distinguishes "no valid input yet" from a
/// computed result that legitimately contains zeros.
///
/// # Examples
///
/// ```
/// use salary_adjuster::models::PayrollResult;
///
/// let sentinel = PayrollResult::zeroed();
/// assert!(sentinel.is_zeroed());
/// assert_eq!(sentinel.adjusted_salary, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// The deduction for missing time.
    pub penalty: f64,
    /// The addition for overtime.
    pub bonus: f64,
    /// Monthly salary minus penalty plus bonus.
    pub adjusted_salary: f64,
    /// Total minutes the month fell short of the required time.
    pub total_missing_minutes: f64,
    /// Total minutes worked beyond the required time.
    pub total_overtime_minutes: f64,
    /// The number of days marked as worked.
    pub worked_days: u32,
}

impl PayrollResult {
    /// Returns the "not enough information to compute" sentinel: every
    /// field zero.
    pub fn zeroed() -> Self {
        Self {
            penalty: 0.0,
            bonus: 0.0,
            adjusted_salary: 0.0,
            total_missing_minutes: 0.0,
            total_overtime_minutes: 0.0,
            worked_days: 0,
        }
    }

    /// Returns true if this result is the zeroed sentinel, i.e. the
    /// configuration was rejected and nothing was computed.
    pub fn is_zeroed(&self) -> bool {
        self.penalty == 0.0
            && self.bonus == 0.0
            && self.adjusted_salary == 0.0
            && self.total_missing_minutes == 0.0
            && self.total_overtime_minutes == 0.0
            && self.worked_days == 0
    }
}
