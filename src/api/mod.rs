//! HTTP API module for the salary adjustment engine.
//!
//! This module provides the REST API endpoints for evaluating attendance
//! sheets and for fetching the form's reset defaults.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ConfigRequest, DayRecordRequest, EvaluationRequest};
pub use response::{ApiError, ApiErrorResponse, EvaluationResponse};
pub use state::AppState;
