//! Error types for the projection engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can report. Errors fall into two kinds (see
//! [`ErrorKind`]): bad configuration, and a goal that cannot be reached
//! within the simulation bounds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for the projection engine.
///
/// # Example
///
/// ```
/// use projection_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/plan.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/plan.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value violates its invariant.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfiguration {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// A holiday entry is not a `YYYY-MM-DD` date.
    #[error("Invalid holiday date '{value}': {message}")]
    InvalidHolidayDate {
        /// The raw string from the configuration.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// The goal simulation could not reach the target within its bounds.
    #[error(
        "Goal of {target} not reachable after {days_simulated} calendar days (projected {projected}): {message}"
    )]
    UnboundedSimulation {
        /// The target value.
        target: Decimal,
        /// The projected value when the simulation stopped.
        projected: Decimal,
        /// Calendar days simulated before stopping.
        days_simulated: u32,
        /// Why the simulation stopped.
        message: String,
    },
}

/// Coarse classification of [`EngineError`] for callers that only need to
/// explain why a projection could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The static configuration is missing, unreadable or invalid.
    Configuration,
    /// The goal is not reachable under the current assumptions.
    UnboundedSimulation,
}

impl EngineError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfiguration { .. }
            | EngineError::InvalidHolidayDate { .. } => ErrorKind::Configuration,
            EngineError::UnboundedSimulation { .. } => ErrorKind::UnboundedSimulation,
        }
    }

    pub(crate) fn invalid_config(field: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidConfiguration {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
