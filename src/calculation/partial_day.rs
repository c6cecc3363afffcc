//! Hours credited for the current working day.
//!
//! Credit is hour-windowed rather than a smooth elapsed-time measure: whole
//! hours since the window opened are counted, and the minutes of the current
//! hour only count while that hour lies inside the working window. The
//! result is then clamped to the configured hours per working day (and to the
//! window length).

use chrono::{NaiveDateTime, Timelike};
use rust_decimal::Decimal;

use crate::config::WorkCalendarConfig;
use crate::models::AuditStep;

use super::calendar::is_working_datetime;

const MINUTES_PER_HOUR: u32 = 60;

/// The result of estimating today's hours, including the audit step.
#[derive(Debug, Clone)]
pub struct PartialDayResult {
    /// Hours credited for the day of `now`.
    pub hours: Decimal,
    /// The audit step recording this estimate.
    pub audit_step: AuditStep,
}

/// Estimates hours worked so far on the calendar day of `now`.
///
/// # Returns
///
/// - `0` if the day is not a working day.
/// - Otherwise a value in `[0, min(hours_per_workday, end_hour - start_hour)]`.
///
/// # Example
///
/// ```
/// use projection_engine::calculation::fractional_hours_worked_today;
/// use projection_engine::config::WorkCalendarConfig;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let calendar = WorkCalendarConfig::default(); // 08:00 - 17:00
///
/// // Monday 10:30 -> 2 whole hours + 30 minutes
/// let now = NaiveDateTime::parse_from_str("2026-01-12 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(fractional_hours_worked_today(now, &calendar, Decimal::from(8)), Decimal::new(25, 1));
///
/// // Saturday -> nothing
/// let now = NaiveDateTime::parse_from_str("2026-01-17 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(fractional_hours_worked_today(now, &calendar, Decimal::from(8)), Decimal::ZERO);
/// ```
pub fn fractional_hours_worked_today(
    now: NaiveDateTime,
    calendar: &WorkCalendarConfig,
    hours_per_workday: Decimal,
) -> Decimal {
    if !is_working_datetime(now, calendar) {
        return Decimal::ZERO;
    }

    let hour = now.hour();
    let start = calendar.workday_start_hour();
    let end = calendar.workday_end_hour();

    let whole_hours = Decimal::from(hour.saturating_sub(start)).min(hours_per_workday);
    let minutes = if (start..end).contains(&hour) {
        Decimal::from(now.minute())
    } else {
        Decimal::ZERO
    };

    let per_hour = Decimal::from(MINUTES_PER_HOUR);
    let hours = (whole_hours * per_hour + minutes) / per_hour;

    hours
        .min(hours_per_workday)
        .min(Decimal::from(calendar.window_hours()))
        .max(Decimal::ZERO)
}

/// Estimates today's hours and records the estimate as an audit step.
pub fn fractional_hours_audited(
    now: NaiveDateTime,
    calendar: &WorkCalendarConfig,
    hours_per_workday: Decimal,
    step_number: u32,
) -> PartialDayResult {
    let working = is_working_datetime(now, calendar);
    let hours = fractional_hours_worked_today(now, calendar, hours_per_workday);

    let reasoning = if !working {
        format!("{} is not a working day; no hours credited", now.date())
    } else if now.hour() < calendar.workday_start_hour() {
        format!(
            "{:02}:{:02} is before the {:02}:00 start; no hours credited yet",
            now.hour(),
            now.minute(),
            calendar.workday_start_hour()
        )
    } else {
        format!(
            "{:02}:{:02} on a working day credits {} hours (cap {})",
            now.hour(),
            now.minute(),
            hours.normalize(),
            hours_per_workday.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "partial_day_hours".to_string(),
        rule_name: "Partial Day Hours".to_string(),
        input: serde_json::json!({
            "now": now.to_string(),
            "workday_start_hour": calendar.workday_start_hour(),
            "workday_end_hour": calendar.workday_end_hour(),
            "hours_per_workday": hours_per_workday.normalize().to_string()
        }),
        output: serde_json::json!({
            "working_day": working,
            "hours": hours.normalize().to_string()
        }),
        reasoning,
    };

    PartialDayResult { hours, audit_step }
}
