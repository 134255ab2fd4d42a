//! Raw clock-time parsing.
//!
//! The attendance form delivers clock times as raw `"HH:MM"` text. This
//! module converts that text to minutes-since-midnight with deliberately
//! minimal ceremony: no bounds checking, no normalization, and NaN (never
//! zero) for anything that does not parse.

use crate::models::TimeOfDay;

/// Converts an `"HH:MM"` time to minutes since midnight.
///
/// Splits the raw text on `:` and parses both components as numbers,
/// returning `hour * 60 + minute`. There is no bounds checking: `"25:99"`
/// yields 1599. If either component fails to parse, the result is NaN and
/// must propagate so that downstream arithmetic visibly becomes NaN
/// instead of silently producing a plausible-looking wrong value.
///
/// # Arguments
///
/// * `time` - The raw wall-clock time to convert
///
/// # Returns
///
/// Minutes since midnight, or NaN for unparseable input.
///
/// # Examples
///
/// ```
/// use salary_adjuster::calculation::parse_time_to_minutes;
/// use salary_adjuster::models::TimeOfDay;
///
/// assert_eq!(parse_time_to_minutes(&TimeOfDay::new("08:30")), 510.0);
/// assert_eq!(parse_time_to_minutes(&TimeOfDay::new("00:00")), 0.0);
///
/// // Out-of-range components are not rejected.
/// assert_eq!(parse_time_to_minutes(&TimeOfDay::new("25:99")), 1599.0);
///
/// // Malformed input yields NaN, not zero.
/// assert!(parse_time_to_minutes(&TimeOfDay::new("ab:cd")).is_nan());
/// assert!(parse_time_to_minutes(&TimeOfDay::new("")).is_nan());
/// ```
pub fn parse_time_to_minutes(time: &TimeOfDay) -> f64 {
    let mut components = time.as_str().split(':');
    let hour = component_or_nan(components.next());
    let minute = component_or_nan(components.next());
    hour * 60.0 + minute
}

/// Returns the minutes worked between two clock times: `end - start`.
///
/// The difference may be negative when `end` precedes `start` (overnight
/// shifts or user error). That is not special-cased here; the negative
/// value flows into the missing/overtime tallies the same as any other
/// value. NaN from either time propagates.
///
/// # Examples
///
/// ```
/// use salary_adjuster::calculation::worked_minutes;
/// use salary_adjuster::models::TimeOfDay;
///
/// let start = TimeOfDay::new("08:00");
/// let end = TimeOfDay::new("16:00");
/// assert_eq!(worked_minutes(&start, &end), 480.0);
///
/// // End before start is a documented edge case, not an error.
/// assert_eq!(worked_minutes(&end, &start), -480.0);
/// ```
pub fn worked_minutes(start: &TimeOfDay, end: &TimeOfDay) -> f64 {
    parse_time_to_minutes(end) - parse_time_to_minutes(start)
}

fn component_or_nan(component: Option<&str>) -> f64 {
    component
        .and_then(|c| c.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
