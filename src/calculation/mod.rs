//! Calculation logic for the projection engine.
//!
//! This module contains the calendar rules (weekends and holidays), working-day
//! counting, the partial-day hour estimate, accrual of saved and projected
//! value, the goal-date simulator, and the evaluation that composes them at a
//! given instant.

mod accrual;
mod calendar;
mod goal_projection;
mod partial_day;
mod projection;
mod working_days;

pub use accrual::{
    AccrualResult, AccruedValue, calculate_accrued_value, calculate_accrued_value_audited,
    hourly_rate, projected_daily_rate, projected_hourly_rate,
};
pub use calendar::{DayKind, classify_day, is_working_datetime, is_working_day};
pub use goal_projection::days_to_reach_goal;
pub use partial_day::{PartialDayResult, fractional_hours_audited, fractional_hours_worked_today};
pub use projection::{
    estimate_days_to_goal, estimated_asset_units, evaluate_projection, summarize_projection,
};
pub use working_days::{
    WorkingDayCountResult, count_working_days, count_working_days_audited, working_days_in_range,
};
