//! Batch processing of schedule files.
//!
//! This module provides the [`BatchProcessor`] type, which runs every line
//! of a schedule source through the pipeline and keeps the cross-line
//! state: the names of employees already reported.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::calculation::process_line;
use crate::config::InvalidLinePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{BatchHalt, BatchReport, EmployeeRecord, SkippedLine};

/// Processes schedule lines one at a time, rejecting repeated employees.
///
/// # Example
///
/// ```
/// use schedule_pay::batch::BatchProcessor;
/// use schedule_pay::config::InvalidLinePolicy;
///
/// let input = "RENE=MO10:00-12:00\nASTRID=SU20:00-21:00\n";
/// let mut processor = BatchProcessor::new(InvalidLinePolicy::Abort, "USD");
/// let report = processor.run(input.as_bytes(), "inline");
///
/// assert_eq!(report.payments.len(), 2);
/// assert_eq!(report.payments[1].message(), "The amount to pay ASTRID is: 25 USD");
/// ```
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    policy: InvalidLinePolicy,
    currency: String,
    seen_names: HashSet<String>,
}

impl BatchProcessor {
    /// Creates a processor with no names seen yet.
    pub fn new(policy: InvalidLinePolicy, currency: impl Into<String>) -> Self {
        Self {
            policy,
            currency: currency.into(),
            seen_names: HashSet::new(),
        }
    }

    /// Returns the policy applied to invalid lines.
    pub fn policy(&self) -> InvalidLinePolicy {
        self.policy
    }

    /// Processes one raw line.
    ///
    /// Surrounding whitespace, including the line terminator, is trimmed.
    /// A blank line yields `Ok(None)`. Otherwise the line goes through
    /// [`process_line`] and its employee name is checked against the names
    /// already seen. A name is only remembered once its line succeeded.
    ///
    /// # Returns
    ///
    /// Returns the record, or an error if:
    /// - the line fails the pipeline (one of the four line errors)
    /// - the employee was already seen (`DuplicatedEmployee`)
    pub fn process_line(
        &mut self,
        raw: &str,
        line_number: usize,
    ) -> EngineResult<Option<EmployeeRecord>> {
        let line = raw.trim();
        if line.is_empty() {
            debug!(line_number, "Skipping blank line");
            return Ok(None);
        }

        let record = process_line(line, line_number)?;
        if !self.seen_names.insert(record.name().to_string()) {
            return Err(EngineError::DuplicatedEmployee {
                name: record.name().to_string(),
                line_number,
            });
        }
        Ok(Some(record))
    }

    /// Runs every line of `reader`, numbering lines from 1.
    ///
    /// Line errors halt the batch under [`InvalidLinePolicy::Abort`] and
    /// are recorded as skipped under [`InvalidLinePolicy::Skip`]. A
    /// repeated employee always halts, and so does a line that cannot be
    /// read, with `InputReadError` naming `source`. Payments made before a
    /// halt are kept in the report.
    pub fn run<R: BufRead>(&mut self, reader: R, source: &str) -> BatchReport {
        let mut report = BatchReport::default();
        for (index, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    let err = EngineError::InputReadError {
                        path: source.to_string(),
                        message: e.to_string(),
                    };
                    warn!(line_number = index + 1, error = %err, "Batch halted");
                    report.halted = Some(BatchHalt::from(&err));
                    break;
                }
            };
            if !self.apply_line(&mut report, &line, index + 1) {
                break;
            }
        }
        log_finished(&report, source);
        report
    }

    /// Runs lines already held in memory, numbering them from 1.
    ///
    /// Behaves like [`BatchProcessor::run`] without the read errors.
    pub fn run_lines<I, S>(&mut self, lines: I, source: &str) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = BatchReport::default();
        for (index, line) in lines.into_iter().enumerate() {
            if !self.apply_line(&mut report, line.as_ref(), index + 1) {
                break;
            }
        }
        log_finished(&report, source);
        report
    }

    /// Processes one line into `report`. Returns false once the batch
    /// has halted.
    fn apply_line(&mut self, report: &mut BatchReport, line: &str, line_number: usize) -> bool {
        match self.process_line(line, line_number) {
            Ok(Some(record)) => {
                report.payments.push(record.to_payment_line(&self.currency));
                true
            }
            Ok(None) => true,
            Err(err) if err.is_line_error() && self.policy == InvalidLinePolicy::Skip => {
                warn!(line_number, error = %err, "Skipping invalid line");
                report.skipped.push(SkippedLine {
                    line_number,
                    message: err.to_string(),
                });
                true
            }
            Err(err) => {
                warn!(line_number, error = %err, "Batch halted");
                report.halted = Some(BatchHalt::from(&err));
                false
            }
        }
    }

    /// Opens the file at `path` and runs it.
    ///
    /// # Returns
    ///
    /// Returns `InputNotFound` if the file cannot be opened, otherwise the
    /// report of [`BatchProcessor::run`].
    pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> EngineResult<BatchReport> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let file = File::open(path).map_err(|_| EngineError::InputNotFound {
            path: path_str.clone(),
        })?;

        info!(path = %path_str, "Processing schedule file");
        Ok(self.run(BufReader::new(file), &path_str))
    }
}

fn log_finished(report: &BatchReport, source: &str) {
    info!(
        source,
        payments = report.payments.len(),
        skipped = report.skipped.len(),
        total = report.total_amount(),
        halted = report.halted.is_some(),
        "Batch finished"
    );
}
