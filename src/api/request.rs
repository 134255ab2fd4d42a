//! Request types for the salary adjustment engine API.
//!
//! This module defines the JSON request structures for the `/evaluate`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{DayRecord, PayrollConfig, TimeOfDay};

/// Request body for the `/evaluate` endpoint.
///
/// Contains the configuration fields and the attendance records for one
/// evaluation. The day list's length is owned by the caller; typically
/// it tracks the configured working-day count, but the engine places no
/// requirement on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The configuration fields.
    pub config: ConfigRequest,
    /// The attendance records, one per working day.
    #[serde(default)]
    pub days: Vec<DayRecordRequest>,
}

/// Configuration fields exactly as the attendance form sends them: raw
/// text, numeric or not. Parsing and validation happen inside the engine
/// so that garbage input degrades to the zeroed result instead of a
/// request error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigRequest {
    /// Raw text of the monthly-salary field.
    pub monthly_salary: String,
    /// Raw text of the working-days field.
    pub working_days: String,
    /// Raw text of the required-daily-hours field.
    pub required_daily_hours: String,
}

/// One day's attendance in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecordRequest {
    /// The clock-in time as raw `"HH:MM"` text.
    #[serde(default)]
    pub start: String,
    /// The clock-out time as raw `"HH:MM"` text.
    #[serde(default)]
    pub end: String,
    /// Whether the employee worked this day. Defaults to true, matching
    /// the form's day template.
    #[serde(default = "default_worked")]
    pub worked: bool,
}

fn default_worked() -> bool {
    true
}

impl From<ConfigRequest> for PayrollConfig {
    fn from(req: ConfigRequest) -> Self {
        PayrollConfig::from_fields(
            &req.monthly_salary,
            &req.working_days,
            &req.required_daily_hours,
        )
    }
}

impl From<DayRecordRequest> for DayRecord {
    fn from(req: DayRecordRequest) -> Self {
        DayRecord {
            start: TimeOfDay::new(req.start),
            end: TimeOfDay::new(req.end),
            worked: req.worked,
        }
    }
}
