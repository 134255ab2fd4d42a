//! Typed engine defaults.
//!
//! This module contains the strongly-typed structures that are
//! deserialized from the `defaults.yaml` file.

use serde::{Deserialize, Serialize};

/// The raw field values the attendance form returns to when reset.
///
/// These are kept as text, like the form fields they back: the salary and
/// working-days fields start empty, the required-hours field starts at
/// `"8"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    /// Raw text for the monthly-salary field.
    pub monthly_salary: String,
    /// Raw text for the working-days field.
    pub working_days: String,
    /// Raw text for the required-daily-hours field.
    pub required_daily_hours: String,
}

/// The template a freshly created attendance day starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayDefaults {
    /// The initial clock-in text.
    pub start: String,
    /// The initial clock-out text.
    pub end: String,
    /// Whether a new day starts marked as worked.
    pub worked: bool,
}

/// The complete engine defaults loaded from `defaults.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineDefaults {
    /// Reset values for the configuration fields.
    pub form: FormDefaults,
    /// Template for newly created day records.
    pub day: DayDefaults,
}
