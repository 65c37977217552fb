//! Batch report models.
//!
//! This module defines the [`BatchReport`] produced by running a whole
//! schedule file, with its skipped lines and halt reason.

use serde::Serialize;

use crate::error::EngineError;

use super::PaymentLine;

/// A line that failed and was skipped by the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// The 1-based line number.
    pub line_number: usize,
    /// The error message for the line.
    pub message: String,
}

/// The reason a batch stopped before the end of its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchHalt {
    /// The line that stopped the batch, if the error is tied to a line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
    /// The error message.
    pub message: String,
}

impl From<&EngineError> for BatchHalt {
    fn from(error: &EngineError) -> Self {
        Self {
            line_number: error.line_number(),
            message: error.to_string(),
        }
    }
}

/// The outcome of processing a batch of schedule lines.
///
/// Payments computed before a halt are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Payments in input order.
    pub payments: Vec<PaymentLine>,
    /// Lines skipped because they failed validation.
    pub skipped: Vec<SkippedLine>,
    /// Why the batch stopped early, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub halted: Option<BatchHalt>,
}

impl BatchReport {
    /// Returns true if every input line was processed.
    pub fn is_complete(&self) -> bool {
        self.halted.is_none()
    }

    /// Returns the sum of all payments.
    pub fn total_amount(&self) -> u64 {
        self.payments.iter().map(|p| u64::from(p.amount)).sum()
    }
}
