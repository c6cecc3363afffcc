//! Configuration loading and management for the projection engine.
//!
//! This module loads a projection plan from YAML files and validates it into
//! a [`ProjectionConfig`]: start date, savings rate, working calendar,
//! holidays, asset price assumptions and the goal.
//!
//! # Example
//!
//! ```no_run
//! use projection_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/brl_btc").unwrap();
//! println!("Loaded plan: {}", loader.config().name());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AccrualConfig, AssetPriceConfig, AssetSection, DEFAULT_MAX_CALENDAR_DAYS,
    DEFAULT_WORKDAY_END_HOUR, DEFAULT_WORKDAY_START_HOUR, HOLIDAY_DATE_FORMAT, HolidayEntry,
    HolidaySet, HolidaysFile, PlanFile, ProjectionConfig, SavingsSection, SimulationSection,
    WorkCalendarConfig, WorkdaySection,
};
