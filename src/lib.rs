//! Attendance-based salary adjustment engine.
//!
//! This crate derives missing-time penalties and overtime bonuses from
//! per-day attendance records, measured against a configured required
//! daily-hours target, and produces an adjusted monthly salary.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
