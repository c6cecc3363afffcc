//! Accrued value calculation.
//!
//! Converts elapsed working time into saved and projected value:
//!
//! ```text
//! total_hours_worked = working_days_elapsed * hours_per_workday + fractional_hours_today
//! hourly_rate        = amount_per_period / (hours_per_workday * working_days_per_period)
//! accrued_from_work  = hourly_rate * total_hours_worked
//! total_value        = accrued_from_work + initial_value
//! projected_value    = total_value * multiplier
//! ```
//!
//! For a fixed configuration every output is non-decreasing in
//! `total_hours_worked`, which the goal simulator relies on.

use rust_decimal::Decimal;

use crate::config::AccrualConfig;
use crate::models::AuditStep;

/// The value accrued for a given amount of working time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccruedValue {
    /// Hours worked in total.
    pub total_hours_worked: Decimal,
    /// Savings per working hour, before the multiplier.
    pub hourly_rate: Decimal,
    /// Savings from work.
    pub accrued_from_work: Decimal,
    /// Savings from work plus the initial lump sum.
    pub total_value: Decimal,
    /// `total_value` scaled by the multiplier.
    pub projected_value: Decimal,
}

/// The result of an accrual calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct AccrualResult {
    /// The accrued value.
    pub value: AccruedValue,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Savings per working hour, before the multiplier.
pub fn hourly_rate(accrual: &AccrualConfig) -> Decimal {
    accrual.amount_per_period()
        / (accrual.hours_per_workday() * Decimal::from(accrual.working_days_per_period()))
}

/// Projected value gained per working hour.
pub fn projected_hourly_rate(accrual: &AccrualConfig) -> Decimal {
    hourly_rate(accrual) * accrual.multiplier()
}

/// Projected value gained per working day.
///
/// This is the daily rate the goal simulator advances by.
///
/// # Example
///
/// ```
/// use projection_engine::calculation::projected_daily_rate;
/// use projection_engine::config::AccrualConfig;
/// use rust_decimal::Decimal;
///
/// let accrual = AccrualConfig::new(
///     Decimal::from(2200),
///     22,
///     Decimal::from(8),
///     Decimal::from(25),
/// ).unwrap();
/// assert_eq!(projected_daily_rate(&accrual), Decimal::from(2500));
/// ```
pub fn projected_daily_rate(accrual: &AccrualConfig) -> Decimal {
    accrual.amount_per_period() / Decimal::from(accrual.working_days_per_period())
        * accrual.multiplier()
}

/// Computes the value accrued after `working_days_elapsed` full days plus
/// `fractional_hours_today`.
///
/// # Example
///
/// ```
/// use projection_engine::calculation::calculate_accrued_value;
/// use projection_engine::config::AccrualConfig;
/// use rust_decimal::Decimal;
///
/// // 1760 per 22 days of 8 hours = 10 per hour, projected at 2x
/// let accrual = AccrualConfig::new(
///     Decimal::from(1760),
///     22,
///     Decimal::from(8),
///     Decimal::from(2),
/// ).unwrap();
///
/// let value = calculate_accrued_value(3, Decimal::from(4), &accrual, Decimal::from(100));
/// assert_eq!(value.total_hours_worked, Decimal::from(28));
/// assert_eq!(value.accrued_from_work, Decimal::from(280));
/// assert_eq!(value.total_value, Decimal::from(380));
/// assert_eq!(value.projected_value, Decimal::from(760));
/// ```
pub fn calculate_accrued_value(
    working_days_elapsed: u32,
    fractional_hours_today: Decimal,
    accrual: &AccrualConfig,
    initial_value: Decimal,
) -> AccruedValue {
    let total_hours_worked =
        Decimal::from(working_days_elapsed) * accrual.hours_per_workday() + fractional_hours_today;
    let hourly_rate = hourly_rate(accrual);
    let accrued_from_work = hourly_rate * total_hours_worked;
    let total_value = accrued_from_work + initial_value;
    let projected_value = total_value * accrual.multiplier();

    AccruedValue {
        total_hours_worked,
        hourly_rate,
        accrued_from_work,
        total_value,
        projected_value,
    }
}

/// Computes the accrued value and records it as an audit step.
pub fn calculate_accrued_value_audited(
    working_days_elapsed: u32,
    fractional_hours_today: Decimal,
    accrual: &AccrualConfig,
    initial_value: Decimal,
    step_number: u32,
) -> AccrualResult {
    let value = calculate_accrued_value(
        working_days_elapsed,
        fractional_hours_today,
        accrual,
        initial_value,
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "accrued_value".to_string(),
        rule_name: "Accrued Value".to_string(),
        input: serde_json::json!({
            "working_days_elapsed": working_days_elapsed,
            "fractional_hours_today": fractional_hours_today.normalize().to_string(),
            "amount_per_period": accrual.amount_per_period().normalize().to_string(),
            "working_days_per_period": accrual.working_days_per_period(),
            "hours_per_workday": accrual.hours_per_workday().normalize().to_string(),
            "multiplier": accrual.multiplier().normalize().to_string(),
            "initial_value": initial_value.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_hours_worked": value.total_hours_worked.normalize().to_string(),
            "hourly_rate": value.hourly_rate.round_dp(6).normalize().to_string(),
            "accrued_from_work": value.accrued_from_work.round_dp(2).to_string(),
            "total_value": value.total_value.round_dp(2).to_string(),
            "projected_value": value.projected_value.round_dp(2).to_string()
        }),
        reasoning: format!(
            "{} hours x {} per hour + {} initial = {}, x{} = {}",
            value.total_hours_worked.normalize(),
            value.hourly_rate.round_dp(2),
            initial_value.normalize(),
            value.total_value.round_dp(2),
            accrual.multiplier().normalize(),
            value.projected_value.round_dp(2)
        ),
    };

    AccrualResult { value, audit_step }
}
