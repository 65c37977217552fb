//! Request types for the schedule pay API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/calculate/batch` endpoints.

use serde::{Deserialize, Serialize};

fn default_line_number() -> usize {
    1
}

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// One schedule line, e.g. `RENE=MO10:00-12:00`.
    pub line: String,
    /// The line number reported in errors.
    #[serde(default = "default_line_number")]
    pub line_number: usize,
}

/// Request body for the `/calculate/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Schedule lines in file order. Line numbers start at 1.
    pub lines: Vec<String>,
}
