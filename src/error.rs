//! Error types for the schedule pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating schedules,
//! processing batches and loading configuration.

use thiserror::Error;

/// The main error type for the schedule pay engine.
///
/// The first four variants are line errors raised by the core pipeline.
/// Each carries the 1-based line number of the offending schedule line.
///
/// # Example
///
/// ```
/// use schedule_pay::error::EngineError;
///
/// let error = EngineError::DuplicatedDay { line_number: 2 };
/// assert_eq!(error.to_string(), "Data in line 2 has a duplicated day.");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The schedule line does not match the required grammar.
    #[error("Data in line {line_number} does not have the specified structure.")]
    DataStructure {
        /// The line where the error was found.
        line_number: usize,
    },

    /// The same day code appears more than once in one schedule.
    #[error("Data in line {line_number} has a duplicated day.")]
    DuplicatedDay {
        /// The line where the error was found.
        line_number: usize,
    },

    /// A start or end hour falls outside the accepted range.
    #[error("Data in line {line_number} has an invalid hour.")]
    InvalidHour {
        /// The line where the error was found.
        line_number: usize,
    },

    /// A start hour is not strictly before its end hour.
    #[error(
        "Data in line {line_number} has an invalid limit hour. Start hour must be less than the end hour."
    )]
    LimitHour {
        /// The line where the error was found.
        line_number: usize,
    },

    /// An employee name was seen twice in the same batch.
    #[error("The employee {name} appears more than once.")]
    DuplicatedEmployee {
        /// The repeated employee name.
        name: String,
        /// The line holding the second occurrence.
        line_number: usize,
    },

    /// The schedule input file does not exist or cannot be opened.
    #[error("The file wasn't found: {path}")]
    InputNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Reading from the schedule input failed part way through.
    #[error("Failed to read schedule input '{path}': {message}")]
    InputReadError {
        /// The input that failed.
        path: String,
        /// A description of the read error.
        message: String,
    },

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
}

impl EngineError {
    /// Returns the source line number for errors tied to a schedule line.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            EngineError::DataStructure { line_number }
            | EngineError::DuplicatedDay { line_number }
            | EngineError::InvalidHour { line_number }
            | EngineError::LimitHour { line_number }
            | EngineError::DuplicatedEmployee { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }

    /// Returns true for the errors raised by the per-line pipeline.
    ///
    /// These are the errors a batch may choose to skip. A duplicated
    /// employee is not one of them since it is detected across lines.
    pub fn is_line_error(&self) -> bool {
        matches!(
            self,
            EngineError::DataStructure { .. }
                | EngineError::DuplicatedDay { .. }
                | EngineError::InvalidHour { .. }
                | EngineError::LimitHour { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
