//! Core data models for the salary adjustment engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day_record;
mod payroll_config;
mod payroll_result;
mod time_of_day;

pub use day_record::DayRecord;
pub use payroll_config::PayrollConfig;
pub use payroll_result::PayrollResult;
pub use time_of_day::TimeOfDay;
