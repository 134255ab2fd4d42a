//! Attendance day model.

use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// One working day's attendance: clock-in and clock-out times plus whether
/// the day was worked at all.
///
/// When `worked` is false the start and end times are ignored for
/// computation purposes, whatever their content. The record is owned by
/// the caller (the surrounding form); the engine never retains or mutates
/// it.
///
/// The [`Default`] record is the template a freshly created day starts
/// from: empty times with `worked` set to true.
///
/// # Examples
///
/// ```
/// use salary_adjuster::models::DayRecord;
///
/// let day = DayRecord::attended("08:00", "16:00");
/// assert!(day.worked);
///
/// let template = DayRecord::default();
/// assert!(template.worked);
/// assert_eq!(template.start.as_str(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The clock-in time.
    pub start: TimeOfDay,
    /// The clock-out time.
    pub end: TimeOfDay,
    /// Whether the employee worked this day.
    #[serde(default = "default_worked")]
    pub worked: bool,
}

fn default_worked() -> bool {
    true
}

impl DayRecord {
    /// Creates a worked day with the given clock-in and clock-out times.
    pub fn attended(start: impl Into<TimeOfDay>, end: impl Into<TimeOfDay>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            worked: true,
        }
    }

    /// Creates an absent day. The times are left empty; they play no part
    /// in the computation.
    pub fn absent() -> Self {
        Self {
            start: TimeOfDay::default(),
            end: TimeOfDay::default(),
            worked: false,
        }
    }
}

impl Default for DayRecord {
    fn default() -> Self {
        Self {
            start: TimeOfDay::default(),
            end: TimeOfDay::default(),
            worked: true,
        }
    }
}
