//! Projection evaluation.
//!
//! Combines the calendar, working-day counter, partial-day estimator, accrual
//! and goal simulator into the values a dashboard displays. Every function
//! here takes `now` as an argument; nothing in the crate reads the clock
//! except the outermost callers (CLI and HTTP handlers).

use std::time::Instant;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::{AssetPriceConfig, ProjectionConfig};
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, GoalEstimate, GoalSimulationResult, ProjectionState,
    ProjectionSummary,
};

use super::accrual::{
    calculate_accrued_value_audited, projected_daily_rate, projected_hourly_rate,
};
use super::goal_projection::days_to_reach_goal;
use super::partial_day::fractional_hours_audited;
use super::working_days::count_working_days_audited;

/// The last day whose work is complete at `today`, i.e. yesterday.
fn last_completed_day(today: NaiveDate) -> NaiveDate {
    today.pred_opt().unwrap_or(NaiveDate::MIN)
}

/// Evaluates working time and accrued value at `now`.
///
/// Working days are counted from the start date through yesterday; today's
/// (possibly in-progress) work contributes only through
/// [`fractional_hours_worked_today`](super::fractional_hours_worked_today),
/// so a finished working day is never counted both as a whole day and as
/// today's hours.
/// Before the start date nothing has accrued beyond the initial value.
///
/// # Example
///
/// ```
/// use projection_engine::calculation::evaluate_projection;
/// use projection_engine::config::ConfigLoader;
/// use chrono::NaiveDateTime;
///
/// let loader = ConfigLoader::load("./config/brl_btc").unwrap();
/// // The plan's first day, before work starts
/// let now = NaiveDateTime::parse_from_str("2025-03-25 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let state = evaluate_projection(now, loader.config());
/// assert_eq!(state.working_days_elapsed, 0);
/// assert_eq!(state.total_value, loader.config().initial_value());
/// ```
pub fn evaluate_projection(now: NaiveDateTime, config: &ProjectionConfig) -> ProjectionState {
    let mut trace = AuditTrace::default();
    evaluate_with_trace(now, config, &mut trace)
}

fn evaluate_with_trace(
    now: NaiveDateTime,
    config: &ProjectionConfig,
    trace: &mut AuditTrace,
) -> ProjectionState {
    let calendar = config.calendar();
    let accrual = config.accrual();
    let today = now.date();

    let count = count_working_days_audited(
        config.start_date(),
        last_completed_day(today),
        calendar,
        trace.next_step_number(),
    );
    trace.steps.push(count.audit_step);

    let fractional_hours_today = if today < config.start_date() {
        trace.warnings.push(AuditWarning {
            code: "BEFORE_START_DATE".to_string(),
            message: format!(
                "Evaluated on {} before the plan starts on {}",
                today,
                config.start_date()
            ),
            severity: "low".to_string(),
        });
        Decimal::ZERO
    } else {
        let partial = fractional_hours_audited(
            now,
            calendar,
            accrual.hours_per_workday(),
            trace.next_step_number(),
        );
        trace.steps.push(partial.audit_step);
        partial.hours
    };

    let accrued = calculate_accrued_value_audited(
        count.working_days,
        fractional_hours_today,
        accrual,
        config.initial_value(),
        trace.next_step_number(),
    );
    trace.steps.push(accrued.audit_step);

    ProjectionState {
        working_days_elapsed: count.working_days,
        fractional_hours_today,
        total_hours_worked: accrued.value.total_hours_worked,
        accrued_from_work: accrued.value.accrued_from_work,
        total_value: accrued.value.total_value,
        current_projected_value: accrued.value.projected_value,
    }
}

/// Estimates how many calendar days from `now` until `current_projected_value`
/// grows to `target` at `daily_rate` per working day.
///
/// The simulation starts from today's date and is capped by the configured
/// `max_calendar_days`.
pub fn estimate_days_to_goal(
    now: NaiveDateTime,
    target: Decimal,
    current_projected_value: Decimal,
    daily_rate: Decimal,
    config: &ProjectionConfig,
) -> EngineResult<GoalSimulationResult> {
    days_to_reach_goal(
        now.date(),
        target,
        current_projected_value,
        daily_rate,
        config.calendar(),
        config.max_calendar_days(),
    )
}

/// Units of the asset that `total_value` buys at the floor price.
pub fn estimated_asset_units(total_value: Decimal, asset: &AssetPriceConfig) -> Decimal {
    total_value / asset.exchange_rate() / asset.floor_price()
}

const SECONDS_PER_DAY: i64 = 86_400;

/// Calendar days from `from` to `to`, counting a partly elapsed day as a
/// whole one. Zero when `to` is not after `from`.
fn calendar_days_between(from: NaiveDateTime, to: NaiveDateTime) -> u32 {
    let seconds = (to - from).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    let days = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Evaluates everything the dashboard shows at `now`.
///
/// An unreachable goal does not fail the summary; it is reported as
/// [`GoalEstimate::Unreachable`] with the reason, plus an audit warning.
pub fn summarize_projection(now: NaiveDateTime, config: &ProjectionConfig) -> ProjectionSummary {
    let started = Instant::now();
    let mut trace = AuditTrace::default();

    let state = evaluate_with_trace(now, config, &mut trace);
    let today = now.date();
    let asset = config.asset();

    let estimated_asset_units = estimated_asset_units(state.total_value, asset);
    let step_number = trace.next_step_number();
    trace.steps.push(AuditStep {
        step_number,
        rule_id: "asset_conversion".to_string(),
        rule_name: "Asset Conversion".to_string(),
        input: serde_json::json!({
            "total_value": state.total_value.round_dp(2).to_string(),
            "exchange_rate": asset.exchange_rate().normalize().to_string(),
            "floor_price": asset.floor_price().normalize().to_string()
        }),
        output: serde_json::json!({
            "units": estimated_asset_units.round_dp(8).to_string(),
            "symbol": asset.symbol()
        }),
        reasoning: format!(
            "{} / {} / {} = {} {}",
            state.total_value.round_dp(2),
            asset.exchange_rate().normalize(),
            asset.floor_price().normalize(),
            estimated_asset_units.round_dp(4),
            asset.symbol()
        ),
    });

    let daily_rate = projected_daily_rate(config.accrual());
    let goal_outcome = estimate_days_to_goal(
        now,
        config.goal(),
        state.current_projected_value,
        daily_rate,
        config,
    );
    let goal_estimate = match goal_outcome {
        Ok(result) => GoalEstimate::Reachable(result),
        Err(err) => {
            trace.warnings.push(AuditWarning {
                code: "GOAL_UNREACHABLE".to_string(),
                message: err.to_string(),
                severity: "high".to_string(),
            });
            GoalEstimate::Unreachable {
                reason: err.to_string(),
            }
        }
    };
    let step_number = trace.next_step_number();
    trace.steps.push(goal_audit_step(
        step_number,
        today,
        config,
        state.current_projected_value,
        daily_rate,
        &goal_estimate,
    ));

    let goal = config.goal();
    let remaining_to_goal = (goal - state.current_projected_value).max(Decimal::ZERO);
    let goal_progress = (state.current_projected_value / goal).min(Decimal::ONE);

    trace.duration_us = started.elapsed().as_micros() as u64;

    info!(
        plan = %config.name(),
        %now,
        working_days = state.working_days_elapsed,
        projected = %state.current_projected_value.round_dp(2),
        days_to_goal = ?goal_estimate.calendar_days(),
        "Projection evaluated"
    );

    ProjectionSummary {
        plan_name: config.name().to_string(),
        evaluated_at: now,
        estimated_asset_units,
        asset_symbol: asset.symbol().to_string(),
        projected_hourly_rate: projected_hourly_rate(config.accrual()),
        projected_daily_rate: daily_rate,
        calendar_days_since_start: calendar_days_between(
            config.start_date().and_time(NaiveTime::MIN),
            now,
        ),
        days_until_floor_date: calendar_days_between(
            now,
            asset.floor_date().and_time(NaiveTime::MIN),
        ),
        goal,
        remaining_to_goal,
        goal_progress,
        goal_estimate,
        state,
        audit_trace: trace,
    }
}

fn goal_audit_step(
    step_number: u32,
    today: NaiveDate,
    config: &ProjectionConfig,
    current: Decimal,
    daily_rate: Decimal,
    estimate: &GoalEstimate,
) -> AuditStep {
    let (output, reasoning) = match estimate {
        GoalEstimate::Reachable(result) => (
            serde_json::json!({
                "calendar_days_elapsed": result.calendar_days_elapsed,
                "working_days_simulated": result.working_days_simulated,
                "reached_on": result.reached_on.to_string()
            }),
            format!(
                "Adding {} per working day from {} reaches {} on {} after {} calendar days",
                daily_rate.round_dp(2),
                today,
                config.goal().normalize(),
                result.reached_on,
                result.calendar_days_elapsed
            ),
        ),
        GoalEstimate::Unreachable { reason } => (
            serde_json::json!({ "reachable": false }),
            format!("Goal not reachable: {}", reason),
        ),
    };
    debug!(step_number, %reasoning, "Goal projection audited");

    AuditStep {
        step_number,
        rule_id: "goal_projection".to_string(),
        rule_name: "Goal Projection".to_string(),
        input: serde_json::json!({
            "start": today.to_string(),
            "target": config.goal().normalize().to_string(),
            "current": current.round_dp(2).to_string(),
            "daily_rate": daily_rate.round_dp(2).to_string(),
            "max_calendar_days": config.max_calendar_days()
        }),
        output,
        reasoning,
    }
}
