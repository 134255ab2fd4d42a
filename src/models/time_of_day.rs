//! Wall-clock time model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A wall-clock time as the raw `"HH:MM"` text entered on an attendance
/// form.
///
/// The value is deliberately kept as text: the engine performs no bounds
/// checking and no normalization, and an unparseable value must surface as
/// an invalid (NaN) minute count downstream rather than be rejected up
/// front. See [`crate::calculation::parse_time_to_minutes`] for the
/// conversion to minutes-since-midnight.
///
/// The [`Default`] value is the empty string, which is what a freshly
/// reset attendance form carries.
///
/// # Examples
///
/// ```
/// use salary_adjuster::models::TimeOfDay;
///
/// let clock_in = TimeOfDay::new("08:30");
/// assert_eq!(clock_in.as_str(), "08:30");
/// assert_eq!(TimeOfDay::default().as_str(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(String);

impl TimeOfDay {
    /// Creates a time from its raw text.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw text of the time.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TimeOfDay {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for TimeOfDay {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
