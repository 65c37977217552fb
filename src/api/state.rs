//! Application state for the schedule pay API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::batch::BatchProcessor;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration. Batch state is per request, so nothing
/// here is mutable.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Creates a fresh batch processor using the configured policy and
    /// currency.
    pub fn batch_processor(&self) -> BatchProcessor {
        BatchProcessor::new(self.config.invalid_line_policy(), self.config.currency())
    }
}
