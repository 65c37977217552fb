//! Report rendering for the command-line binary.

use std::io::{self, Write};

use crate::models::BatchReport;

/// Writes a batch report as plain text.
///
/// Payments come first, one sentence each, in input order. Skipped lines
/// follow as warnings, and a halt is written last as an error.
///
/// # Example
///
/// ```
/// use schedule_pay::batch::{BatchProcessor, write_text_report};
/// use schedule_pay::config::InvalidLinePolicy;
///
/// let mut processor = BatchProcessor::new(InvalidLinePolicy::Abort, "USD");
/// let report = processor.run("ASTRID=SU20:00-21:00\n".as_bytes(), "inline");
///
/// let mut out = Vec::new();
/// write_text_report(&report, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "The amount to pay ASTRID is: 25 USD\n");
/// ```
pub fn write_text_report<W: Write>(report: &BatchReport, out: &mut W) -> io::Result<()> {
    for payment in &report.payments {
        writeln!(out, "{}", payment.message())?;
    }
    for skipped in &report.skipped {
        writeln!(out, "Warning: skipped line {}: {}", skipped.line_number, skipped.message)?;
    }
    if let Some(halt) = &report.halted {
        writeln!(out, "Error: {}", halt.message)?;
    }
    Ok(())
}

/// Writes a batch report as pretty-printed JSON followed by a newline.
pub fn write_json_report<W: Write>(report: &BatchReport, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
