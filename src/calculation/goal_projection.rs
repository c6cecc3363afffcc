//! Goal projection simulation.
//!
//! Walks forward one calendar day at a time from a start date, adding a fixed
//! daily rate on every working day, until a projected value reaches a target.
//! The walk is bounded: a non-positive rate fails immediately, and the walk
//! stops with [`EngineError::UnboundedSimulation`] once it has advanced
//! `max_calendar_days` days without reaching the target.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::WorkCalendarConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::GoalSimulationResult;

use super::calendar::is_working_day;

/// Simulates how many calendar days it takes for `current` to reach `target`.
///
/// # Arguments
///
/// * `start` - The day the simulation starts from. Its own accrual is assumed
///   to be part of `current`; the first simulated day is `start + 1`.
/// * `target` - The value to reach.
/// * `current` - The value at `start`.
/// * `daily_rate` - Value added on every simulated working day.
/// * `calendar` - Which days are working days.
/// * `max_calendar_days` - The most calendar days the simulation may advance.
///
/// # Returns
///
/// - `calendar_days_elapsed == 0` when `current >= target` already.
/// - [`EngineError::UnboundedSimulation`] when `daily_rate <= 0` and the
///   target is not yet met, when the cap is reached, when the projected
///   value would overflow, or when the calendar runs out of representable
///   dates.
///
/// # Example
///
/// ```
/// use projection_engine::calculation::days_to_reach_goal;
/// use projection_engine::config::WorkCalendarConfig;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // From Monday: Tuesday adds 50, Wednesday adds 50 -> target of 100 met
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let result = days_to_reach_goal(
///     monday,
///     Decimal::from(100),
///     Decimal::ZERO,
///     Decimal::from(50),
///     &WorkCalendarConfig::default(),
///     365,
/// ).unwrap();
///
/// assert_eq!(result.calendar_days_elapsed, 2);
/// assert_eq!(result.reached_on, NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
/// ```
pub fn days_to_reach_goal(
    start: NaiveDate,
    target: Decimal,
    current: Decimal,
    daily_rate: Decimal,
    calendar: &WorkCalendarConfig,
    max_calendar_days: u32,
) -> EngineResult<GoalSimulationResult> {
    if current >= target {
        return Ok(GoalSimulationResult {
            calendar_days_elapsed: 0,
            working_days_simulated: 0,
            reached_on: start,
            projected_value: current,
        });
    }

    if daily_rate <= Decimal::ZERO {
        warn!(%daily_rate, %target, %current, "Goal simulation refused non-positive rate");
        return Err(EngineError::UnboundedSimulation {
            target,
            projected: current,
            days_simulated: 0,
            message: format!("daily rate {} is not positive", daily_rate),
        });
    }

    let mut cursor = start;
    let mut projected = current;
    let mut calendar_days_elapsed: u32 = 0;
    let mut working_days_simulated: u32 = 0;

    while projected < target {
        if calendar_days_elapsed >= max_calendar_days {
            warn!(
                %target,
                %projected,
                max_calendar_days,
                "Goal simulation reached its cap"
            );
            return Err(EngineError::UnboundedSimulation {
                target,
                projected,
                days_simulated: calendar_days_elapsed,
                message: format!(
                    "simulation cap of {} calendar days reached",
                    max_calendar_days
                ),
            });
        }

        cursor = cursor
            .succ_opt()
            .ok_or_else(|| EngineError::UnboundedSimulation {
                target,
                projected,
                days_simulated: calendar_days_elapsed,
                message: format!("no calendar day after {}", cursor),
            })?;
        calendar_days_elapsed += 1;

        if is_working_day(cursor, calendar) {
            projected = projected.checked_add(daily_rate).ok_or_else(|| {
                warn!(%target, %projected, %daily_rate, "Goal simulation overflowed");
                EngineError::UnboundedSimulation {
                    target,
                    projected,
                    days_simulated: calendar_days_elapsed,
                    message: format!(
                        "projected value overflows when adding {} on {}",
                        daily_rate, cursor
                    ),
                }
            })?;
            working_days_simulated += 1;
        }
    }

    debug!(
        %start,
        reached_on = %cursor,
        calendar_days_elapsed,
        working_days_simulated,
        "Goal simulation complete"
    );

    Ok(GoalSimulationResult {
        calendar_days_elapsed,
        working_days_simulated,
        reached_on: cursor,
        projected_value: projected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::count_working_days;
    use crate::config::HolidaySet;
    use crate::error::ErrorKind;
    use chrono::{Duration, Weekday};
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn weekends_only() -> WorkCalendarConfig {
        WorkCalendarConfig::default()
    }

    #[test]
    fn test_monday_start_reaches_100_in_two_days() {
        // 2026-01-12 is a Monday
        let result = days_to_reach_goal(
            make_date("2026-01-12"),
            dec("100"),
            Decimal::ZERO,
            dec("50"),
            &weekends_only(),
            365,
        )
        .unwrap();

        assert_eq!(result.calendar_days_elapsed, 2);
        assert_eq!(result.working_days_simulated, 2);
        assert_eq!(result.reached_on, make_date("2026-01-14"));
        assert_eq!(result.projected_value, dec("100"));
    }

    #[test]
    fn test_already_at_target_returns_zero() {
        let start = make_date("2026-01-12");
        let result =
            days_to_reach_goal(start, dec("100"), dec("100"), dec("50"), &weekends_only(), 365)
                .unwrap();
        assert_eq!(result.calendar_days_elapsed, 0);
        assert_eq!(result.reached_on, start);
    }

    #[test]
    fn test_above_target_with_zero_rate_returns_zero() {
        let result = days_to_reach_goal(
            make_date("2026-01-12"),
            dec("100"),
            dec("150"),
            Decimal::ZERO,
            &weekends_only(),
            365,
        )
        .unwrap();
        assert_eq!(result.calendar_days_elapsed, 0);
        assert_eq!(result.projected_value, dec("150"));
    }

    #[test]
    fn test_zero_rate_is_unbounded() {
        let result = days_to_reach_goal(
            make_date("2026-01-12"),
            dec("100"),
            Decimal::ZERO,
            Decimal::ZERO,
            &weekends_only(),
            365,
        );

        match result {
            Err(EngineError::UnboundedSimulation {
                days_simulated,
                projected,
                ..
            }) => {
                assert_eq!(days_simulated, 0);
                assert_eq!(projected, Decimal::ZERO);
            }
            other => panic!("Expected UnboundedSimulation, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_rate_is_unbounded() {
        let err = days_to_reach_goal(
            make_date("2026-01-12"),
            dec("100"),
            Decimal::ZERO,
            dec("-5"),
            &weekends_only(),
            365,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnboundedSimulation);
        assert!(err.to_string().contains("not positive"));
    }

    #[test]
    fn test_friday_start_skips_weekend() {
        // 2026-01-16 is a Friday: Sat, Sun skipped, Mon 50, Tue 100
        let result = days_to_reach_goal(
            make_date("2026-01-16"),
            dec("100"),
            Decimal::ZERO,
            dec("50"),
            &weekends_only(),
            365,
        )
        .unwrap();
        assert_eq!(result.calendar_days_elapsed, 4);
        assert_eq!(result.working_days_simulated, 2);
        assert_eq!(result.reached_on, make_date("2026-01-20"));
    }

    #[test]
    fn test_holiday_is_skipped() {
        // Wed 2025-12-24 start; Christmas Thursday skipped, Fri 50, weekend,
        // Mon 2025-12-29 reaches 100
        let calendar =
            WorkCalendarConfig::with_holidays(HolidaySet::parse(["2025-12-25"]).unwrap());
        let result = days_to_reach_goal(
            make_date("2025-12-24"),
            dec("100"),
            Decimal::ZERO,
            dec("50"),
            &calendar,
            365,
        )
        .unwrap();
        assert_eq!(result.calendar_days_elapsed, 5);
        assert_eq!(result.reached_on, make_date("2025-12-29"));
    }

    #[test]
    fn test_overshoot_stops_on_first_crossing() {
        let result = days_to_reach_goal(
            make_date("2026-01-12"),
            dec("100"),
            dec("10"),
            dec("60"),
            &weekends_only(),
            365,
        )
        .unwrap();
        assert_eq!(result.calendar_days_elapsed, 2);
        assert_eq!(result.projected_value, dec("130"));
    }

    #[test]
    fn test_cap_reached_is_unbounded() {
        let result = days_to_reach_goal(
            make_date("2026-01-12"),
            dec("1000"),
            Decimal::ZERO,
            dec("1"),
            &weekends_only(),
            10,
        );

        match result {
            Err(EngineError::UnboundedSimulation {
                days_simulated,
                projected,
                target,
                ..
            }) => {
                assert_eq!(days_simulated, 10);
                // Tue..Fri, Mon..Thu of the next week
                assert_eq!(projected, dec("8"));
                assert_eq!(target, dec("1000"));
            }
            other => panic!("Expected UnboundedSimulation, got {:?}", other),
        }
    }

    #[test]
    fn test_goal_met_exactly_on_cap_day_succeeds() {
        let result = days_to_reach_goal(
            make_date("2026-01-12"),
            dec("100"),
            Decimal::ZERO,
            dec("50"),
            &weekends_only(),
            2,
        )
        .unwrap();
        assert_eq!(result.calendar_days_elapsed, 2);
    }

    #[test]
    fn test_calendar_without_working_days_hits_cap() {
        let calendar = WorkCalendarConfig::new(
            [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ],
            HolidaySet::default(),
            8,
            17,
        )
        .unwrap();
        let err = days_to_reach_goal(
            make_date("2026-01-12"),
            dec("100"),
            Decimal::ZERO,
            dec("50"),
            &calendar,
            1000,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnboundedSimulation);
    }

    #[test]
    fn test_end_of_calendar_is_unbounded() {
        let err = days_to_reach_goal(
            NaiveDate::MAX,
            dec("100"),
            Decimal::ZERO,
            dec("50"),
            &weekends_only(),
            365,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnboundedSimulation);
    }

    #[test]
    fn test_overflowing_projection_is_unbounded() {
        // Tuesday adds the rate, Wednesday would exceed Decimal::MAX
        let result = days_to_reach_goal(
            make_date("2026-01-12"),
            Decimal::MAX,
            Decimal::ZERO,
            Decimal::MAX - dec("1000"),
            &weekends_only(),
            365,
        );

        match result {
            Err(EngineError::UnboundedSimulation {
                days_simulated,
                projected,
                message,
                ..
            }) => {
                assert_eq!(days_simulated, 2);
                assert_eq!(projected, Decimal::MAX - dec("1000"));
                assert!(message.contains("overflows"));
            }
            other => panic!("Expected UnboundedSimulation, got {:?}", other),
        }
    }

    #[test]
    fn test_huge_rate_reaching_max_target_succeeds() {
        let result = days_to_reach_goal(
            make_date("2026-01-12"),
            Decimal::MAX,
            Decimal::ZERO,
            Decimal::MAX,
            &weekends_only(),
            365,
        )
        .unwrap();
        assert_eq!(result.calendar_days_elapsed, 1);
        assert_eq!(result.projected_value, Decimal::MAX);
    }

    proptest! {
        #[test]
        fn prop_reached_day_is_first_crossing(
            start_offset in 0i64..1500,
            current in 0u32..1000,
            gap in 1u32..20_000,
            rate in 1u32..500,
        ) {
            let calendar = WorkCalendarConfig::with_holidays(
                HolidaySet::parse(["2025-12-25", "2026-01-01", "2026-04-21"]).unwrap(),
            );
            let start = make_date("2024-06-01") + Duration::days(start_offset);
            let current = Decimal::from(current);
            let target = current + Decimal::from(gap);
            let rate = Decimal::from(rate);

            let result = days_to_reach_goal(start, target, current, rate, &calendar, 18_250).unwrap();
            let first_day = start + Duration::days(1);

            let worked = count_working_days(first_day, result.reached_on, &calendar);
            prop_assert_eq!(worked, result.working_days_simulated);
            prop_assert!(current + rate * Decimal::from(worked) >= target);
            prop_assert!(current + rate * Decimal::from(worked - 1) < target);
            prop_assert!(is_working_day(result.reached_on, &calendar));
            prop_assert_eq!(
                (result.reached_on - start).num_days(),
                i64::from(result.calendar_days_elapsed)
            );
        }
    }
}
