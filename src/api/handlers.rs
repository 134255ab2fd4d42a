//! HTTP request handlers for the salary adjustment engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::evaluate;
use crate::models::{DayRecord, PayrollConfig};

use super::request::EvaluationRequest;
use super::response::{ApiError, EvaluationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .route("/defaults", get(defaults_handler))
        .with_state(state)
}

/// Handler for POST /evaluate endpoint.
///
/// Accepts an attendance sheet and returns the computed salary
/// adjustment. The evaluation itself cannot fail: garbage configuration
/// degrades to the zeroed result and malformed clock times surface as
/// null monetary figures, so the only error responses here are for
/// requests that are not valid JSON in the first place.
async fn evaluate_handler(
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing evaluation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let config: PayrollConfig = request.config.into();
    let days: Vec<DayRecord> = request.days.into_iter().map(Into::into).collect();

    if !config.is_valid() {
        warn!(
            correlation_id = %correlation_id,
            "Configuration rejected, returning zeroed result"
        );
    }

    // Perform the evaluation
    let start_time = Instant::now();
    let result = evaluate(&config, &days);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        days_count = days.len(),
        worked_days = result.worked_days,
        adjusted_salary = result.adjusted_salary,
        duration_us = duration.as_micros() as u64,
        "Evaluation completed"
    );

    let response = EvaluationResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        result,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for GET /defaults endpoint.
///
/// Returns the engine defaults backing the form's "reset all" operation.
async fn defaults_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.defaults().defaults().clone())
}
