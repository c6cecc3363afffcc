//! Working-day classification.
//!
//! This module answers the single question every other calculation depends
//! on: is a given calendar day worked? A day is worked unless its weekday is
//! a configured weekend day or its date is a listed holiday.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::WorkCalendarConfig;

/// The kind of a calendar day with respect to work.
///
/// # Example
///
/// ```
/// use projection_engine::calculation::DayKind;
///
/// let kind = DayKind::Holiday;
/// assert_eq!(format!("{}", kind), "Holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// A normal working day; savings accrue.
    Working,
    /// A configured weekend day.
    Weekend,
    /// A listed holiday. Takes precedence over [`DayKind::Weekend`].
    Holiday,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Working => write!(f, "Working"),
            DayKind::Weekend => write!(f, "Weekend"),
            DayKind::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Classifies a date against the calendar.
///
/// # Example
///
/// ```
/// use projection_engine::calculation::{classify_day, DayKind};
/// use projection_engine::config::{HolidaySet, WorkCalendarConfig};
/// use chrono::NaiveDate;
///
/// let calendar = WorkCalendarConfig::with_holidays(HolidaySet::parse(["2025-12-25"]).unwrap());
///
/// // 2025-12-25 is a Thursday
/// let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
/// assert_eq!(classify_day(christmas, &calendar), DayKind::Holiday);
///
/// // 2025-12-27 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2025, 12, 27).unwrap();
/// assert_eq!(classify_day(saturday, &calendar), DayKind::Weekend);
/// ```
pub fn classify_day(date: NaiveDate, calendar: &WorkCalendarConfig) -> DayKind {
    if calendar.holidays().contains(date) {
        DayKind::Holiday
    } else if calendar.is_weekend(date.weekday()) {
        DayKind::Weekend
    } else {
        DayKind::Working
    }
}

/// Returns true if `date` is a working day.
///
/// # Example
///
/// ```
/// use projection_engine::calculation::is_working_day;
/// use projection_engine::config::WorkCalendarConfig;
/// use chrono::NaiveDate;
///
/// let calendar = WorkCalendarConfig::default();
/// // 2026-01-12 is a Monday
/// assert!(is_working_day(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(), &calendar));
/// // 2026-01-17 is a Saturday
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(), &calendar));
/// ```
pub fn is_working_day(date: NaiveDate, calendar: &WorkCalendarConfig) -> bool {
    classify_day(date, calendar) == DayKind::Working
}

/// Returns true if the calendar day of `datetime` is a working day.
///
/// The time of day is ignored.
pub fn is_working_datetime(datetime: NaiveDateTime, calendar: &WorkCalendarConfig) -> bool {
    is_working_day(datetime.date(), calendar)
}
