//! Payroll configuration model.

use serde::{Deserialize, Serialize};

/// The three configuration scalars that drive an evaluation: monthly
/// salary, number of working days in the month, and required hours per
/// day.
///
/// The values come from user-editable form fields, so any of them may be
/// garbage. [`PayrollConfig::from_fields`] maps unparseable text to NaN,
/// and [`PayrollConfig::is_valid`] decides whether there is enough
/// information to compute: all three scalars must be finite and strictly
/// positive. An invalid configuration short-circuits the whole evaluation
/// to the zeroed result rather than raising an error.
///
/// # Examples
///
/// ```
/// use salary_adjuster::models::PayrollConfig;
///
/// let config = PayrollConfig::from_fields("30000", "22", "8");
/// assert!(config.is_valid());
///
/// let unfinished = PayrollConfig::from_fields("", "22", "8");
/// assert!(!unfinished.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// The monthly salary, in a single unspecified currency unit.
    pub monthly_salary: f64,
    /// The number of working days in the month.
    pub working_days: f64,
    /// The required work duration per day, in hours.
    pub required_daily_hours: f64,
}

impl PayrollConfig {
    /// Creates a configuration from already-numeric scalars.
    pub fn new(monthly_salary: f64, working_days: f64, required_daily_hours: f64) -> Self {
        Self {
            monthly_salary,
            working_days,
            required_daily_hours,
        }
    }

    /// Creates a configuration from the raw text of the three form fields.
    ///
    /// Salary and required hours parse as floats, working days as an
    /// integer. A field that fails to parse is stored as NaN so that
    /// [`is_valid`](Self::is_valid) rejects the configuration as a whole;
    /// nothing is coerced to zero.
    pub fn from_fields(monthly_salary: &str, working_days: &str, required_daily_hours: &str) -> Self {
        Self {
            monthly_salary: parse_float(monthly_salary),
            working_days: parse_integer(working_days),
            required_daily_hours: parse_float(required_daily_hours),
        }
    }

    /// Returns true when all three scalars are finite and strictly
    /// positive, i.e. there is enough information to compute an
    /// adjustment.
    pub fn is_valid(&self) -> bool {
        is_positive(self.monthly_salary)
            && is_positive(self.working_days)
            && is_positive(self.required_daily_hours)
    }
}

fn parse_float(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

fn parse_integer(raw: &str) -> f64 {
    raw.trim().parse::<i64>().map(|n| n as f64).unwrap_or(f64::NAN)
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
