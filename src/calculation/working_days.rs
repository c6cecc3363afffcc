//! Working-day counting over closed date ranges.

use chrono::NaiveDate;

use crate::config::WorkCalendarConfig;
use crate::models::AuditStep;

use super::calendar::is_working_day;

/// The result of counting working days, including the audit step.
#[derive(Debug, Clone)]
pub struct WorkingDayCountResult {
    /// Working days in the range.
    pub working_days: u32,
    /// The audit step recording this count.
    pub audit_step: AuditStep,
}

/// Lists the working days in `[start, end]`, both ends inclusive.
///
/// An inverted range (`start > end`) yields nothing.
pub fn working_days_in_range(
    start: NaiveDate,
    end: NaiveDate,
    calendar: &WorkCalendarConfig,
) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|date| *date <= end)
        .filter(|date| is_working_day(*date, calendar))
        .collect()
}

/// Counts working days in `[start, end]`, both ends inclusive.
///
/// Every calendar day in the range is visited once. An inverted range
/// (`start > end`) counts 0.
///
/// # Example
///
/// ```
/// use projection_engine::calculation::count_working_days;
/// use projection_engine::config::{HolidaySet, WorkCalendarConfig};
/// use chrono::NaiveDate;
///
/// let calendar = WorkCalendarConfig::with_holidays(HolidaySet::parse(["2025-12-25"]).unwrap());
///
/// // Mon 2025-12-22 to Sun 2025-12-28: five weekdays, one of them Christmas
/// let start = NaiveDate::from_ymd_opt(2025, 12, 22).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 12, 28).unwrap();
/// assert_eq!(count_working_days(start, end, &calendar), 4);
/// ```
pub fn count_working_days(start: NaiveDate, end: NaiveDate, calendar: &WorkCalendarConfig) -> u32 {
    start
        .iter_days()
        .take_while(|date| *date <= end)
        .filter(|date| is_working_day(*date, calendar))
        .count() as u32
}

/// Counts working days and records the count as an audit step.
pub fn count_working_days_audited(
    start: NaiveDate,
    end: NaiveDate,
    calendar: &WorkCalendarConfig,
    step_number: u32,
) -> WorkingDayCountResult {
    let working_days = count_working_days(start, end, calendar);
    let calendar_days = if start <= end {
        (end - start).num_days() + 1
    } else {
        0
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "working_day_count".to_string(),
        rule_name: "Working Day Count".to_string(),
        input: serde_json::json!({
            "start": start.to_string(),
            "end": end.to_string(),
            "holidays_configured": calendar.holidays().len()
        }),
        output: serde_json::json!({
            "calendar_days": calendar_days,
            "working_days": working_days
        }),
        reasoning: if start <= end {
            format!(
                "{} of {} calendar days between {} and {} are working days",
                working_days, calendar_days, start, end
            )
        } else {
            format!("Range {} to {} is empty; no working days", start, end)
        },
    };

    WorkingDayCountResult {
        working_days,
        audit_step,
    }
}
