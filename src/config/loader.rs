//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a projection
//! plan from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{HolidaySet, HolidaysFile, PlanFile, ProjectionConfig};

/// Loads and provides access to a projection configuration.
///
/// # Directory Structure
///
/// ```text
/// config/brl_btc/
/// ├── plan.yaml       # Start date, savings rate, asset prices, goal
/// └── holidays.yaml   # Non-working dates, YYYY-MM-DD
/// ```
///
/// `holidays.yaml` is optional; without it only weekends are skipped.
///
/// # Example
///
/// ```no_run
/// use projection_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/brl_btc")?;
/// println!("Goal: {}", loader.config().goal());
/// # Ok::<(), projection_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ProjectionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `plan.yaml` is missing
    /// - Any file contains invalid YAML or is missing a required field
    /// - A holiday is not a `YYYY-MM-DD` date
    /// - Any value violates its invariant (non-positive rate, inverted
    ///   working window, ...)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let plan_path = path.join("plan.yaml");
        let plan = Self::load_yaml::<PlanFile>(&plan_path)?;

        let holidays_path = path.join("holidays.yaml");
        let holidays = if holidays_path.exists() {
            let file = Self::load_yaml::<HolidaysFile>(&holidays_path)?;
            HolidaySet::parse(file.holidays.iter().map(|h| h.date()))?
        } else {
            HolidaySet::default()
        };

        let config = ProjectionConfig::from_plan(plan, holidays)?;
        debug!(
            plan = %config.name(),
            start_date = %config.start_date(),
            holidays = config.calendar().holidays().len(),
            "Loaded projection configuration"
        );

        Ok(Self { config })
    }

    /// Parses a plan and holiday list from YAML strings.
    pub fn from_yaml_str(plan_yaml: &str, holidays_yaml: Option<&str>) -> EngineResult<Self> {
        let plan: PlanFile =
            serde_yaml::from_str(plan_yaml).map_err(|e| EngineError::ConfigParseError {
                path: "plan.yaml".to_string(),
                message: e.to_string(),
            })?;

        let holidays = match holidays_yaml {
            Some(yaml) => {
                let file: HolidaysFile =
                    serde_yaml::from_str(yaml).map_err(|e| EngineError::ConfigParseError {
                        path: "holidays.yaml".to_string(),
                        message: e.to_string(),
                    })?;
                HolidaySet::parse(file.holidays.iter().map(|h| h.date()))?
            }
            None => HolidaySet::default(),
        };

        Ok(Self {
            config: ProjectionConfig::from_plan(plan, holidays)?,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the validated projection configuration.
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/brl_btc"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const PLAN: &str = r#"
name: "Inline plan"
start_date: "2025-03-25"
initial_value: "0"
goal: "1000"
savings:
  amount_per_period: "2200"
  working_days_per_period: 22
  hours_per_workday: "8"
asset:
  symbol: "BTC"
  floor_price: "1"
  target_price: "1"
  exchange_rate: "1"
  floor_date: "2026-01-01"
"#;

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        let config = loader.config();
        assert_eq!(config.start_date(), NaiveDate::from_ymd_opt(2025, 3, 25).unwrap());
        assert_eq!(config.goal(), dec("15000000"));
        assert_eq!(config.initial_value(), dec("120000"));
        assert_eq!(config.accrual().amount_per_period(), dec("10000"));
        assert_eq!(config.accrual().working_days_per_period(), 22);
        assert_eq!(config.accrual().hours_per_workday(), dec("8"));
        assert_eq!(config.accrual().multiplier(), dec("25"));
        assert_eq!(config.asset().exchange_rate(), dec("5.8"));
        assert_eq!(config.calendar().holidays().len(), 16);
    }

    #[test]
    fn test_loaded_holidays_include_christmas() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        assert!(loader.config().calendar().holidays().contains(christmas));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("plan.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_without_holidays() {
        let loader = ConfigLoader::from_yaml_str(PLAN, None).unwrap();
        assert!(loader.config().calendar().holidays().is_empty());
        assert_eq!(loader.config().name(), "Inline plan");
    }

    #[test]
    fn test_from_yaml_with_malformed_holiday() {
        let result = ConfigLoader::from_yaml_str(PLAN, Some("holidays: [\"2025/12/25\"]"));
        match result {
            Err(EngineError::InvalidHolidayDate { value, .. }) => assert_eq!(value, "2025/12/25"),
            other => panic!("Expected InvalidHolidayDate, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_with_bad_syntax() {
        let result = ConfigLoader::from_yaml_str("name: [unclosed", None);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_from_yaml_with_inverted_window() {
        let plan = format!("{}workday:\n  start_hour: 18\n  end_hour: 9\n", PLAN);
        let err = ConfigLoader::from_yaml_str(&plan, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
