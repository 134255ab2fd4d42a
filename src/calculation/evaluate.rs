//! Aggregate evaluation of an attendance sheet.

use crate::models::{DayRecord, PayrollConfig, PayrollResult};

use super::day_tally::tally_day;
use super::salary_rate::salary_per_minute;

/// Evaluates a month of attendance records against the configured
/// targets, producing the adjusted salary.
///
/// The evaluation is a pure, synchronous transform: it takes an immutable
/// snapshot of the configuration and day records, never mutates or
/// retains them, and returns a freshly constructed result on every call.
/// Nothing is cached; the caller re-invokes it whenever any input
/// changes.
///
/// # Behavior
///
/// 1. An invalid configuration (any scalar non-finite or non-positive)
///    short-circuits to [`PayrollResult::zeroed`], the "not enough
///    information to compute" sentinel rather than an error.
/// 2. Each record is tallied in order via [`tally_day`]; the aggregate is
///    order-independent.
/// 3. `penalty` and `bonus` price the missing and overtime totals at the
///    [`salary_per_minute`] rate, and
///    `adjusted_salary = monthly_salary - penalty + bonus`.
///
/// This function never fails. Malformed clock times surface as NaN in the
/// totals and the monetary fields; the caller must be prepared to display
/// them as "not a number".
///
/// # Arguments
///
/// * `config` - The three configuration scalars
/// * `days` - The attendance records, one per working day, owned by the
///   caller
///
/// # Examples
///
/// ```
/// use salary_adjuster::calculation::evaluate;
/// use salary_adjuster::models::{DayRecord, PayrollConfig};
///
/// let config = PayrollConfig::new(30000.0, 1.0, 8.0);
/// let days = vec![DayRecord::attended("08:00", "18:00")];
///
/// let result = evaluate(&config, &days);
/// assert_eq!(result.total_overtime_minutes, 120.0);
/// assert_eq!(result.bonus, 7500.0);
/// assert_eq!(result.adjusted_salary, 37500.0);
/// ```
pub fn evaluate(config: &PayrollConfig, days: &[DayRecord]) -> PayrollResult {
    if !config.is_valid() {
        return PayrollResult::zeroed();
    }

    let required_minutes = config.required_daily_hours * 60.0;
    let per_minute = salary_per_minute(config);

    let mut total_missing_minutes = 0.0;
    let mut total_overtime_minutes = 0.0;
    let mut worked_days = 0u32;

    for record in days {
        let tally = tally_day(record, required_minutes);
        if tally.attended {
            worked_days += 1;
        }
        total_missing_minutes += tally.missing_minutes;
        total_overtime_minutes += tally.overtime_minutes;
    }

    let penalty = total_missing_minutes * per_minute;
    let bonus = total_overtime_minutes * per_minute;
    let adjusted_salary = config.monthly_salary - penalty + bonus;

    PayrollResult {
        penalty,
        bonus,
        adjusted_salary,
        total_missing_minutes,
        total_overtime_minutes,
        worked_days,
    }
}
