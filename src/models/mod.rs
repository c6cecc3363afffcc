//! Core data models for the projection engine.
//!
//! This module contains the values the engine derives and reports: projection
//! state, goal simulation results, dashboard summaries and audit traces.

mod audit;
mod projection;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use projection::{GoalEstimate, GoalSimulationResult, ProjectionState, ProjectionSummary};
