//! Configuration types for savings projection.
//!
//! Two layers live here: the raw file structures deserialized from YAML
//! (`*File` / `*Section`), and the validated configuration values that the
//! calculation functions take. Validated values can only be built through
//! their constructors, so every invariant holds for the process lifetime.

use std::collections::{BTreeSet, HashSet};

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Default hour (24h clock) at which a working day starts.
pub const DEFAULT_WORKDAY_START_HOUR: u32 = 8;

/// Default hour (24h clock) at which a working day ends.
pub const DEFAULT_WORKDAY_END_HOUR: u32 = 17;

/// Default cap on simulated calendar days, roughly fifty years.
pub const DEFAULT_MAX_CALENDAR_DAYS: u32 = 18_250;

/// The only accepted textual holiday format.
pub const HOLIDAY_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// File structures
// =============================================================================

/// Savings section of `plan.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SavingsSection {
    /// Amount saved per accounting period (a month).
    pub amount_per_period: Decimal,
    /// Working days in one accounting period.
    pub working_days_per_period: u32,
    /// Hours in one working day.
    pub hours_per_workday: Decimal,
}

/// Workday window section of `plan.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkdaySection {
    /// Hour the working window opens.
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    /// Hour the working window closes.
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,
    /// Days of the week that are never worked.
    #[serde(default = "default_weekend_days")]
    pub weekend_days: Vec<Weekday>,
}

impl Default for WorkdaySection {
    fn default() -> Self {
        Self {
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
            weekend_days: default_weekend_days(),
        }
    }
}

fn default_start_hour() -> u32 {
    DEFAULT_WORKDAY_START_HOUR
}

fn default_end_hour() -> u32 {
    DEFAULT_WORKDAY_END_HOUR
}

fn default_weekend_days() -> Vec<Weekday> {
    vec![Weekday::Sat, Weekday::Sun]
}

/// Asset price section of `plan.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetSection {
    /// Ticker or name of the asset (e.g. "BTC").
    pub symbol: String,
    /// Expected bottom price, in the quote currency.
    pub floor_price: Decimal,
    /// Expected future price, in the quote currency.
    pub target_price: Decimal,
    /// Units of savings currency per unit of quote currency.
    pub exchange_rate: Decimal,
    /// The date the floor price is expected.
    pub floor_date: NaiveDate,
}

/// Simulation section of `plan.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationSection {
    /// Maximum calendar days the goal simulator may advance.
    #[serde(default = "default_max_calendar_days")]
    pub max_calendar_days: u32,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            max_calendar_days: default_max_calendar_days(),
        }
    }
}

fn default_max_calendar_days() -> u32 {
    DEFAULT_MAX_CALENDAR_DAYS
}

/// Structure of `plan.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanFile {
    /// Human-readable plan name.
    pub name: String,
    /// The first day savings accrue.
    pub start_date: NaiveDate,
    /// Lump sum already saved at the start date.
    pub initial_value: Decimal,
    /// The projected value being aimed for.
    pub goal: Decimal,
    /// Savings rate.
    pub savings: SavingsSection,
    /// Working window and weekend.
    #[serde(default)]
    pub workday: WorkdaySection,
    /// Asset price assumptions.
    pub asset: AssetSection,
    /// Goal simulation bounds.
    #[serde(default)]
    pub simulation: SimulationSection,
}

/// A single entry of `holidays.yaml`: either a bare date string or a named date.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HolidayEntry {
    /// `- "2025-12-25"`
    Date(String),
    /// `- { date: "2025-12-25", name: "Natal" }`
    Named {
        /// The holiday date as written.
        date: String,
        /// Display name, unused by the calendar.
        name: String,
    },
}

impl HolidayEntry {
    /// The raw date string of this entry.
    pub fn date(&self) -> &str {
        match self {
            HolidayEntry::Date(date) => date,
            HolidayEntry::Named { date, .. } => date,
        }
    }
}

/// Structure of `holidays.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysFile {
    /// Holiday entries.
    #[serde(default)]
    pub holidays: Vec<HolidayEntry>,
}

// =============================================================================
// Validated configuration
// =============================================================================

/// A fixed set of non-working dates.
///
/// # Example
///
/// ```
/// use projection_engine::config::HolidaySet;
/// use chrono::NaiveDate;
///
/// let holidays = HolidaySet::parse(["2025-12-25", "2026-01-01"]).unwrap();
/// assert!(holidays.contains(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()));
/// assert!(HolidaySet::parse(["25/12/2025"]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Parses `YYYY-MM-DD` strings into a set.
    ///
    /// Anything other than exactly that form (including unpadded months or
    /// days, or a trailing time) is rejected with
    /// [`EngineError::InvalidHolidayDate`].
    pub fn parse<I, S>(values: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dates = values
            .into_iter()
            .map(|value| parse_holiday_date(value.as_ref()))
            .collect::<EngineResult<BTreeSet<_>>>()?;
        Ok(Self { dates })
    }

    /// Returns true if `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of distinct holidays.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Holidays in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

fn parse_holiday_date(value: &str) -> EngineResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, HOLIDAY_DATE_FORMAT).map_err(|e| {
        EngineError::InvalidHolidayDate {
            value: value.to_string(),
            message: e.to_string(),
        }
    })?;

    // chrono accepts unpadded fields; the wire format does not.
    if date.format(HOLIDAY_DATE_FORMAT).to_string() != value {
        return Err(EngineError::InvalidHolidayDate {
            value: value.to_string(),
            message: "expected zero-padded YYYY-MM-DD".to_string(),
        });
    }

    Ok(date)
}

/// Which days are worked and during which hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkCalendarConfig {
    weekend_days: HashSet<Weekday>,
    holidays: HolidaySet,
    workday_start_hour: u32,
    workday_end_hour: u32,
}

impl WorkCalendarConfig {
    /// Creates a calendar, checking `start_hour < end_hour <= 24`.
    pub fn new(
        weekend_days: impl IntoIterator<Item = Weekday>,
        holidays: HolidaySet,
        workday_start_hour: u32,
        workday_end_hour: u32,
    ) -> EngineResult<Self> {
        if workday_end_hour > 24 {
            return Err(EngineError::invalid_config(
                "workday.end_hour",
                format!("{} is past the end of the day", workday_end_hour),
            ));
        }
        if workday_start_hour >= workday_end_hour {
            return Err(EngineError::invalid_config(
                "workday.start_hour",
                format!(
                    "start hour {} must be before end hour {}",
                    workday_start_hour, workday_end_hour
                ),
            ));
        }

        Ok(Self {
            weekend_days: weekend_days.into_iter().collect(),
            holidays,
            workday_start_hour,
            workday_end_hour,
        })
    }

    /// Saturday/Sunday weekend with the default 08:00-17:00 window.
    pub fn with_holidays(holidays: HolidaySet) -> Self {
        Self {
            weekend_days: default_weekend_days().into_iter().collect(),
            holidays,
            workday_start_hour: DEFAULT_WORKDAY_START_HOUR,
            workday_end_hour: DEFAULT_WORKDAY_END_HOUR,
        }
    }

    /// Returns true if `weekday` is configured as a weekend day.
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        self.weekend_days.contains(&weekday)
    }

    /// The holiday set.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Hour the working window opens.
    pub fn workday_start_hour(&self) -> u32 {
        self.workday_start_hour
    }

    /// Hour the working window closes.
    pub fn workday_end_hour(&self) -> u32 {
        self.workday_end_hour
    }

    /// Length of the working window in hours.
    pub fn window_hours(&self) -> u32 {
        self.workday_end_hour - self.workday_start_hour
    }
}

impl Default for WorkCalendarConfig {
    fn default() -> Self {
        Self::with_holidays(HolidaySet::default())
    }
}

/// How fast value accrues from work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccrualConfig {
    amount_per_period: Decimal,
    working_days_per_period: u32,
    hours_per_workday: Decimal,
    multiplier: Decimal,
}

impl AccrualConfig {
    /// Creates an accrual configuration; every field must be positive.
    pub fn new(
        amount_per_period: Decimal,
        working_days_per_period: u32,
        hours_per_workday: Decimal,
        multiplier: Decimal,
    ) -> EngineResult<Self> {
        ensure_positive("savings.amount_per_period", amount_per_period)?;
        if working_days_per_period == 0 {
            return Err(EngineError::invalid_config(
                "savings.working_days_per_period",
                "must be positive",
            ));
        }
        ensure_positive("savings.hours_per_workday", hours_per_workday)?;
        ensure_positive("multiplier", multiplier)?;

        Ok(Self {
            amount_per_period,
            working_days_per_period,
            hours_per_workday,
            multiplier,
        })
    }

    /// Amount saved per accounting period.
    pub fn amount_per_period(&self) -> Decimal {
        self.amount_per_period
    }

    /// Working days in one accounting period.
    pub fn working_days_per_period(&self) -> u32 {
        self.working_days_per_period
    }

    /// Hours in one working day.
    pub fn hours_per_workday(&self) -> Decimal {
        self.hours_per_workday
    }

    /// Scaling factor from saved value to projected value.
    pub fn multiplier(&self) -> Decimal {
        self.multiplier
    }
}

/// Static asset price assumptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPriceConfig {
    symbol: String,
    floor_price: Decimal,
    target_price: Decimal,
    exchange_rate: Decimal,
    floor_date: NaiveDate,
}

impl AssetPriceConfig {
    /// Creates asset assumptions; prices and the exchange rate must be positive.
    pub fn new(
        symbol: impl Into<String>,
        floor_price: Decimal,
        target_price: Decimal,
        exchange_rate: Decimal,
        floor_date: NaiveDate,
    ) -> EngineResult<Self> {
        ensure_positive("asset.floor_price", floor_price)?;
        ensure_positive("asset.target_price", target_price)?;
        ensure_positive("asset.exchange_rate", exchange_rate)?;

        Ok(Self {
            symbol: symbol.into(),
            floor_price,
            target_price,
            exchange_rate,
            floor_date,
        })
    }

    /// Asset ticker.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Expected bottom price.
    pub fn floor_price(&self) -> Decimal {
        self.floor_price
    }

    /// Expected future price.
    pub fn target_price(&self) -> Decimal {
        self.target_price
    }

    /// Savings currency per quote currency.
    pub fn exchange_rate(&self) -> Decimal {
        self.exchange_rate
    }

    /// Date the floor price is expected.
    pub fn floor_date(&self) -> NaiveDate {
        self.floor_date
    }

    /// `target_price / floor_price`.
    pub fn multiplier(&self) -> Decimal {
        self.target_price / self.floor_price
    }
}

/// The complete static configuration for a projection.
///
/// Passed explicitly into every calculation so tests can swap calendars and
/// rates without touching the algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionConfig {
    name: String,
    start_date: NaiveDate,
    initial_value: Decimal,
    goal: Decimal,
    calendar: WorkCalendarConfig,
    accrual: AccrualConfig,
    asset: AssetPriceConfig,
    max_calendar_days: u32,
}

impl ProjectionConfig {
    /// Assembles a configuration from validated parts.
    ///
    /// The accrual multiplier must agree with the asset prices; use
    /// [`ProjectionConfig::from_plan`] to derive it.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        initial_value: Decimal,
        goal: Decimal,
        calendar: WorkCalendarConfig,
        accrual: AccrualConfig,
        asset: AssetPriceConfig,
        max_calendar_days: u32,
    ) -> EngineResult<Self> {
        if initial_value < Decimal::ZERO {
            return Err(EngineError::invalid_config(
                "initial_value",
                "must not be negative",
            ));
        }
        ensure_positive("goal", goal)?;
        if max_calendar_days == 0 {
            return Err(EngineError::invalid_config(
                "simulation.max_calendar_days",
                "must be positive",
            ));
        }
        if accrual.multiplier() != asset.multiplier() {
            return Err(EngineError::invalid_config(
                "multiplier",
                format!(
                    "accrual multiplier {} does not match asset price ratio {}",
                    accrual.multiplier(),
                    asset.multiplier()
                ),
            ));
        }

        Ok(Self {
            name: name.into(),
            start_date,
            initial_value,
            goal,
            calendar,
            accrual,
            asset,
            max_calendar_days,
        })
    }

    /// Validates a deserialized plan together with its holidays.
    pub fn from_plan(plan: PlanFile, holidays: HolidaySet) -> EngineResult<Self> {
        let calendar = WorkCalendarConfig::new(
            plan.workday.weekend_days,
            holidays,
            plan.workday.start_hour,
            plan.workday.end_hour,
        )?;
        let asset = AssetPriceConfig::new(
            plan.asset.symbol,
            plan.asset.floor_price,
            plan.asset.target_price,
            plan.asset.exchange_rate,
            plan.asset.floor_date,
        )?;
        let accrual = AccrualConfig::new(
            plan.savings.amount_per_period,
            plan.savings.working_days_per_period,
            plan.savings.hours_per_workday,
            asset.multiplier(),
        )?;

        Self::new(
            plan.name,
            plan.start_date,
            plan.initial_value,
            plan.goal,
            calendar,
            accrual,
            asset,
            plan.simulation.max_calendar_days,
        )
    }

    /// Plan name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First day savings accrue.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Lump sum saved at the start date.
    pub fn initial_value(&self) -> Decimal {
        self.initial_value
    }

    /// Target projected value.
    pub fn goal(&self) -> Decimal {
        self.goal
    }

    /// Working calendar.
    pub fn calendar(&self) -> &WorkCalendarConfig {
        &self.calendar
    }

    /// Accrual rates.
    pub fn accrual(&self) -> &AccrualConfig {
        &self.accrual
    }

    /// Asset assumptions.
    pub fn asset(&self) -> &AssetPriceConfig {
        &self.asset
    }

    /// Simulation cap in calendar days.
    pub fn max_calendar_days(&self) -> u32 {
        self.max_calendar_days
    }
}

fn ensure_positive(field: &str, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::invalid_config(
            field,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(())
}
