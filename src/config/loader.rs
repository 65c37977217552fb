//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, InvalidLinePolicy, OutputFormat};

/// Loads and provides access to the engine configuration.
///
/// # Example
///
/// ```no_run
/// use schedule_pay::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default.yaml")?;
/// println!("Amounts are in {}", loader.currency());
/// # Ok::<(), schedule_pay::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, ?config, "Loaded configuration");
        Ok(Self { config })
    }

    /// Loads configuration from `path` when given, or falls back to the
    /// defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> EngineResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parses YAML configuration text. An empty document yields the
    /// defaults.
    fn parse(content: &str, path: &str) -> EngineResult<EngineConfig> {
        if content.trim().is_empty() {
            return Ok(EngineConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the currency label.
    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    /// Returns the batch policy for invalid lines.
    pub fn invalid_line_policy(&self) -> InvalidLinePolicy {
        self.config.on_invalid_line
    }

    /// Returns the configured output format.
    pub fn output_format(&self) -> OutputFormat {
        self.config.output_format
    }

    /// Returns the HTTP bind address.
    pub fn bind_address(&self) -> &str {
        &self.config.bind_address
    }
}
