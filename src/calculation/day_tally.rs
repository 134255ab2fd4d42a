//! Per-day tallying of missing and overtime minutes.

use crate::models::DayRecord;

use super::time_parse::worked_minutes;

/// The contribution of a single attendance record to the evaluation
/// totals.
#[derive(Debug, Clone, PartialEq)]
pub struct DayTally {
    /// Minutes the day fell short of (or was entirely absent from) the
    /// required duration.
    pub missing_minutes: f64,
    /// Minutes the day exceeded the required duration.
    pub overtime_minutes: f64,
    /// Whether the record counts as a worked day.
    pub attended: bool,
}

/// Tallies one attendance record against the required daily minutes.
///
/// - A day with `worked` set to false counts as fully missing that day's
///   required time; its clock times are ignored whatever they contain.
/// - A worked day contributes its shortfall below the target to
///   `missing_minutes`, or its surplus above the target to
///   `overtime_minutes`. Exactly meeting the target contributes to
///   neither.
/// - A worked day whose clock times do not parse yields NaN in both
///   tallies, so every figure derived from the totals reads as invalid
///   rather than plausibly wrong. The day still counts as attended.
/// - Negative worked minutes (clock-out before clock-in) are not
///   corrected: the shortfall becomes `required - negative`, inflating
///   the missing tally. This is the documented behavior for that edge
///   case.
///
/// # Arguments
///
/// * `record` - The attendance record to tally
/// * `required_minutes` - The expected work duration for one day, in minutes
///
/// # Examples
///
/// ```
/// use salary_adjuster::calculation::tally_day;
/// use salary_adjuster::models::DayRecord;
///
/// let short_day = DayRecord::attended("08:00", "15:00");
/// let tally = tally_day(&short_day, 480.0);
/// assert_eq!(tally.missing_minutes, 60.0);
/// assert_eq!(tally.overtime_minutes, 0.0);
/// assert!(tally.attended);
///
/// let absent = DayRecord::absent();
/// let tally = tally_day(&absent, 480.0);
/// assert_eq!(tally.missing_minutes, 480.0);
/// assert!(!tally.attended);
/// ```
pub fn tally_day(record: &DayRecord, required_minutes: f64) -> DayTally {
    if !record.worked {
        return DayTally {
            missing_minutes: required_minutes,
            overtime_minutes: 0.0,
            attended: false,
        };
    }

    let minutes = worked_minutes(&record.start, &record.end);
    if minutes.is_nan() {
        // Unparseable clock times poison both tallies.
        return DayTally {
            missing_minutes: f64::NAN,
            overtime_minutes: f64::NAN,
            attended: true,
        };
    }

    let mut tally = DayTally {
        missing_minutes: 0.0,
        overtime_minutes: 0.0,
        attended: true,
    };
    if minutes < required_minutes {
        tally.missing_minutes = required_minutes - minutes;
    } else if minutes > required_minutes {
        tally.overtime_minutes = minutes - required_minutes;
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_day_is_fully_missing() {
        let tally = tally_day(&DayRecord::absent(), 480.0);
        assert_eq!(tally.missing_minutes, 480.0);
        assert_eq!(tally.overtime_minutes, 0.0);
        assert!(!tally.attended);
    }

    #[test]
    fn test_absent_day_ignores_clock_times() {
        let mut record = DayRecord::attended("08:00", "20:00");
        record.worked = false;
        let tally = tally_day(&record, 480.0);
        assert_eq!(tally.missing_minutes, 480.0);
        assert_eq!(tally.overtime_minutes, 0.0);
    }

    #[test]
    fn test_short_day_contributes_shortfall() {
        let tally = tally_day(&DayRecord::attended("08:00", "12:00"), 480.0);
        assert_eq!(tally.missing_minutes, 240.0);
        assert_eq!(tally.overtime_minutes, 0.0);
        assert!(tally.attended);
    }

    #[test]
    fn test_long_day_contributes_surplus() {
        let tally = tally_day(&DayRecord::attended("08:00", "18:00"), 480.0);
        assert_eq!(tally.missing_minutes, 0.0);
        assert_eq!(tally.overtime_minutes, 120.0);
    }

    #[test]
    fn test_exact_day_contributes_to_neither_total() {
        let tally = tally_day(&DayRecord::attended("08:00", "16:00"), 480.0);
        assert_eq!(tally.missing_minutes, 0.0);
        assert_eq!(tally.overtime_minutes, 0.0);
        assert!(tally.attended);
    }

    #[test]
    fn test_negative_worked_minutes_inflate_the_missing_tally() {
        // Clock-out before clock-in: -60 worked minutes, so the shortfall
        // is 480 - (-60) = 540. Deliberately not corrected.
        let tally = tally_day(&DayRecord::attended("09:00", "08:00"), 480.0);
        assert_eq!(tally.missing_minutes, 540.0);
        assert_eq!(tally.overtime_minutes, 0.0);
    }

    #[test]
    fn test_unparseable_times_poison_both_tallies() {
        let tally = tally_day(&DayRecord::attended("ab:cd", "16:00"), 480.0);
        assert!(tally.missing_minutes.is_nan());
        assert!(tally.overtime_minutes.is_nan());
        assert!(tally.attended);
    }

    #[test]
    fn test_untouched_form_template_counts_as_unparseable() {
        // A freshly created day carries empty times with worked = true.
        let tally = tally_day(&DayRecord::default(), 480.0);
        assert!(tally.missing_minutes.is_nan());
        assert!(tally.attended);
    }
}
