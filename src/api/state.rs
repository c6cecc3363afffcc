//! Application state for the projection engine API.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use crate::config::{ConfigLoader, ProjectionConfig};

/// Shared application state.
///
/// Holds the loaded plan. It is immutable for the life of the server, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded projection configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the loaded plan.
    pub fn config(&self) -> &ProjectionConfig {
        self.config.config()
    }

    /// The instant to evaluate at: the requested one, or local wall-clock time.
    pub fn resolve_now(&self, requested: Option<NaiveDateTime>) -> NaiveDateTime {
        requested.unwrap_or_else(|| Local::now().naive_local())
    }
}
