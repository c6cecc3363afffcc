//! Error bodies returned by the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, ErrorKind};

/// Machine-readable failure category. Each code fixes its HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The body is not JSON or lacks the JSON content type.
    MalformedJson,
    /// The body is JSON but a field is missing, mistyped or out of range.
    ValidationError,
    /// The loaded plan is unusable.
    ConfigurationError,
    /// The simulator gave up before the target was met.
    GoalUnreachable,
}

impl ErrorCode {
    /// HTTP status that accompanies this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::MalformedJson | ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::ConfigurationError | ErrorCode::GoalUnreachable => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

/// JSON error body: `{"code", "message", "details"?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Failure category.
    pub code: ErrorCode,
    /// Human-readable summary.
    pub message: String,
    /// Underlying error text, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// An error without details.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attaches the underlying error text.
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// An [`ApiError`] paired with the status it is sent with.
pub struct ApiErrorResponse {
    /// Status line of the response.
    pub status: StatusCode,
    /// Response body.
    pub error: ApiError,
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        Self {
            status: error.code.status(),
            error,
        }
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(err: EngineError) -> Self {
        let error = match err.kind() {
            ErrorKind::Configuration => {
                ApiError::new(ErrorCode::ConfigurationError, "Plan configuration is invalid")
            }
            ErrorKind::UnboundedSimulation => ApiError::new(
                ErrorCode::GoalUnreachable,
                "Goal not reachable under current assumptions",
            ),
        };
        error.details(err.to_string()).into()
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}
