//! Error types for the salary adjustment engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only the ambient surfaces (loading the engine defaults from disk) can
//! fail with an error; the evaluation itself communicates failure through
//! sentinel values in [`crate::models::PayrollResult`] and never returns
//! an `Err`.

use thiserror::Error;

/// The main error type for the salary adjustment engine.
///
/// # Example
///
/// ```
/// use salary_adjuster::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/defaults.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/defaults.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
