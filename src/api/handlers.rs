//! HTTP request handlers for the projection engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    estimate_days_to_goal, evaluate_projection, projected_daily_rate, summarize_projection,
};

use super::request::{GoalEstimateRequest, ProjectionRequest};
use super::response::{ApiError, ApiErrorResponse, ErrorCode};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/projection", post(projection_handler))
        .route("/goal-estimate", post(goal_estimate_handler))
        .with_state(state)
}

/// Translates a body extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::new(ErrorCode::ValidationError, body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::new(ErrorCode::MalformedJson, format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new(ErrorCode::MalformedJson, "Content-Type must be application/json")
        }
        _ => ApiError::new(ErrorCode::MalformedJson, "Failed to parse request body"),
    };
    ApiErrorResponse::from(error).into_response()
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /projection.
///
/// Evaluates the loaded plan at the requested instant (or now) and returns
/// the full dashboard summary.
async fn projection_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProjectionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing projection request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let now = state.resolve_now(request.now);
    let start_time = Instant::now();
    let summary = summarize_projection(now, state.config());

    info!(
        correlation_id = %correlation_id,
        %now,
        projected = %summary.state.current_projected_value.round_dp(2),
        days_to_goal = ?summary.goal_estimate.calendar_days(),
        duration_us = start_time.elapsed().as_micros(),
        "Projection completed successfully"
    );
    json_ok(summary)
}

/// Handler for POST /goal-estimate.
///
/// Runs the goal simulator. Fields missing from the request fall back to the
/// plan's goal and daily rate and to the projection evaluated at `now`.
async fn goal_estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GoalEstimateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing goal estimate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(message) = request.validate() {
        warn!(correlation_id = %correlation_id, error = %message, "Invalid goal request");
        return ApiErrorResponse::from(ApiError::new(ErrorCode::ValidationError, message))
            .into_response();
    }

    let config = state.config();
    let now = state.resolve_now(request.now);
    let target = request.target.unwrap_or_else(|| config.goal());
    let current = request
        .current_value
        .unwrap_or_else(|| evaluate_projection(now, config).current_projected_value);
    let daily_rate = request
        .daily_rate
        .unwrap_or_else(|| projected_daily_rate(config.accrual()));

    let start_time = Instant::now();
    match estimate_days_to_goal(now, target, current, daily_rate, config) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                calendar_days = result.calendar_days_elapsed,
                reached_on = %result.reached_on,
                duration_us = start_time.elapsed().as_micros(),
                "Goal estimate completed successfully"
            );
            json_ok(result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Goal estimate failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
