//! Configuration types for the schedule pay engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default so a partial file is valid.

use serde::Deserialize;

/// What a batch does when a line fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidLinePolicy {
    /// Stop the batch at the first invalid line.
    #[default]
    Abort,
    /// Record the invalid line as skipped and carry on.
    Skip,
}

/// How the command-line binary prints its report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One sentence per payment.
    #[default]
    Text,
    /// The whole batch report as JSON.
    Json,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

/// Runtime configuration.
///
/// The pay rates are not configurable; see
/// [`RATE_TABLE`](crate::calculation::RATE_TABLE).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Currency label printed after amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Batch behaviour on invalid lines.
    #[serde(default)]
    pub on_invalid_line: InvalidLinePolicy,
    /// Output format of the command-line binary.
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Address the HTTP API listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            on_invalid_line: InvalidLinePolicy::default(),
            output_format: OutputFormat::default(),
            bind_address: default_bind_address(),
        }
    }
}
