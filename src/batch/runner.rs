//! Schedule file runs for the command-line binary.
//!
//! [`run_report`] resolves the effective policy and format from the
//! configuration and the command-line overrides, runs the file and writes
//! the report. Its return value decides the process exit status.

use std::io::{self, Write};
use std::path::Path;

use crate::config::{ConfigLoader, InvalidLinePolicy, OutputFormat};

use super::{BatchProcessor, write_json_report, write_text_report};

/// Command-line choices that take precedence over the configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOverrides {
    /// Skip invalid lines whatever policy is configured.
    pub skip_invalid: bool,
    /// Report format to use instead of the configured one.
    pub format: Option<OutputFormat>,
}

impl RunOverrides {
    /// Returns the invalid-line policy in effect.
    pub fn policy(&self, config: &ConfigLoader) -> InvalidLinePolicy {
        if self.skip_invalid {
            InvalidLinePolicy::Skip
        } else {
            config.invalid_line_policy()
        }
    }

    /// Returns the report format in effect.
    pub fn format(&self, config: &ConfigLoader) -> OutputFormat {
        self.format.unwrap_or(config.output_format())
    }
}

/// Runs the schedule file at `path` and writes its report to `out`.
///
/// A file that cannot be opened is reported on `err` as `Error: ...`.
///
/// # Returns
///
/// Returns true when every line was processed, false when the file was
/// missing or the batch halted. Fails only if writing the output fails.
pub fn run_report<P, W, E>(
    config: &ConfigLoader,
    path: P,
    overrides: RunOverrides,
    out: &mut W,
    err: &mut E,
) -> io::Result<bool>
where
    P: AsRef<Path>,
    W: Write,
    E: Write,
{
    let mut processor = BatchProcessor::new(overrides.policy(config), config.currency());
    let report = match processor.run_file(path) {
        Ok(report) => report,
        Err(e) => {
            writeln!(err, "Error: {e}")?;
            return Ok(false);
        }
    };

    match overrides.format(config) {
        OutputFormat::Text => write_text_report(&report, out)?,
        OutputFormat::Json => write_json_report(&report, out)?,
    }
    Ok(report.is_complete())
}
