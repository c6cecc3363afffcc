//! HTTP API module for the projection engine.
//!
//! This module provides the REST API endpoints a dashboard uses to obtain
//! the current projection and goal estimates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{GoalEstimateRequest, ProjectionRequest};
pub use response::{ApiError, ApiErrorResponse, ErrorCode};
pub use state::AppState;
