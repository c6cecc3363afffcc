//! Request types for the projection engine API.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for the `/projection` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// Instant to evaluate at. Defaults to the server's local time.
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}

/// Request body for the `/goal-estimate` endpoint.
///
/// Every field is optional; missing values come from the loaded plan and the
/// projection at `now`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalEstimateRequest {
    /// Instant to simulate from. Defaults to the server's local time.
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
    /// Value to reach. Defaults to the plan's goal.
    #[serde(default)]
    pub target: Option<Decimal>,
    /// Projected value at `now`. Defaults to the evaluated projection.
    #[serde(default)]
    pub current_value: Option<Decimal>,
    /// Projected value added per working day. Defaults to the plan's rate.
    #[serde(default)]
    pub daily_rate: Option<Decimal>,
}

impl GoalEstimateRequest {
    /// Checks the values that make no sense regardless of the plan.
    ///
    /// A non-positive `daily_rate` is accepted here; the simulator reports it
    /// as an unreachable goal.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(target) = self.target {
            if target <= Decimal::ZERO {
                return Err(format!("target must be positive, got {}", target));
            }
        }
        if let Some(current) = self.current_value {
            if current < Decimal::ZERO {
                return Err(format!("current_value must not be negative, got {}", current));
            }
        }
        Ok(())
    }
}
