//! Projection result models.
//!
//! This module contains the derived values the engine hands to its
//! presentation collaborator: the [`ProjectionState`] recomputed on every
//! evaluation, the [`GoalSimulationResult`] of the goal simulator, and the
//! [`ProjectionSummary`] that bundles everything a dashboard shows.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AuditTrace;

/// Working time and value accrued up to an evaluation instant.
///
/// Never persisted; recomputed from the clock and configuration each time.
///
/// # Example
///
/// ```
/// use projection_engine::models::ProjectionState;
/// use rust_decimal::Decimal;
///
/// let state = ProjectionState {
///     working_days_elapsed: 2,
///     fractional_hours_today: Decimal::new(35, 1),
///     total_hours_worked: Decimal::new(195, 1),
///     accrued_from_work: Decimal::from(195),
///     total_value: Decimal::from(1195),
///     current_projected_value: Decimal::from(2390),
/// };
/// assert_eq!(state.working_days_elapsed, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionState {
    /// Completed working days from the start date up to yesterday.
    pub working_days_elapsed: u32,
    /// Hours credited for the current, possibly in-progress, day.
    pub fractional_hours_today: Decimal,
    /// `working_days_elapsed * hours_per_workday + fractional_hours_today`.
    pub total_hours_worked: Decimal,
    /// Value saved from work so far, before the multiplier.
    pub accrued_from_work: Decimal,
    /// `accrued_from_work + initial_value`.
    pub total_value: Decimal,
    /// `total_value * multiplier`.
    pub current_projected_value: Decimal,
}

/// Outcome of a goal simulation that reached its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSimulationResult {
    /// Calendar days (not working days) advanced until the target was met.
    pub calendar_days_elapsed: u32,
    /// How many of those days were working days.
    pub working_days_simulated: u32,
    /// The date on which the target is met.
    pub reached_on: NaiveDate,
    /// The projected value on `reached_on`.
    pub projected_value: Decimal,
}

/// The goal estimate as shown to a user: either a date, or why there is none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalEstimate {
    /// The simulator reached the goal.
    Reachable(GoalSimulationResult),
    /// The goal cannot be reached under the current assumptions.
    Unreachable {
        /// Explanation suitable for display.
        reason: String,
    },
}

impl GoalEstimate {
    /// Calendar days until the goal, if it is reachable.
    pub fn calendar_days(&self) -> Option<u32> {
        match self {
            GoalEstimate::Reachable(result) => Some(result.calendar_days_elapsed),
            GoalEstimate::Unreachable { .. } => None,
        }
    }
}

/// Everything the dashboard displays for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Name of the configured plan.
    pub plan_name: String,
    /// The instant the projection was evaluated at.
    pub evaluated_at: NaiveDateTime,
    /// Working time and accrued value.
    pub state: ProjectionState,
    /// Asset units the saved value buys at the floor price.
    pub estimated_asset_units: Decimal,
    /// Ticker of the asset.
    pub asset_symbol: String,
    /// Projected value earned per working hour.
    pub projected_hourly_rate: Decimal,
    /// Projected value earned per working day.
    pub projected_daily_rate: Decimal,
    /// Calendar days since midnight of the start date, rounded up so a
    /// partly elapsed day counts. Zero before the start.
    pub calendar_days_since_start: u32,
    /// Calendar days until midnight of the floor date, rounded up. Zero once
    /// it has passed.
    pub days_until_floor_date: u32,
    /// The configured goal.
    pub goal: Decimal,
    /// `goal - current_projected_value`, never negative.
    pub remaining_to_goal: Decimal,
    /// Fraction of the goal achieved, in `[0, 1]`.
    pub goal_progress: Decimal,
    /// When the goal will be reached.
    pub goal_estimate: GoalEstimate,
    /// How every number above was obtained.
    pub audit_trace: AuditTrace,
}
