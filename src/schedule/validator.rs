//! Schedule line grammar validation.
//!
//! A schedule line is an employee name, `=`, and one or more
//! comma-separated day ranges:
//!
//! ```text
//! NAME=DDHH:MM-HH:MM(,DDHH:MM-HH:MM)*
//! ```
//!
//! `DD` is one of `MO`, `TU`, `WE`, `TH`, `FR`, `SA`, `SU` and the minutes
//! are always `00`. The whole line must match.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// One day range token, e.g. `MO10:00-12:00`.
const TOKEN_PATTERN: &str = r"(?:MO|TU|WE|TH|FR|SA|SU)[0-9]{2}:00-[0-9]{2}:00";

static SCHEDULE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[A-Za-z]+=(?:{TOKEN_PATTERN})(?:,{TOKEN_PATTERN})*$"))
        .expect("Valid schedule line pattern")
});

/// Returns true if `line` matches the schedule grammar.
pub fn is_valid_schedule(line: &str) -> bool {
    SCHEDULE_LINE.is_match(line)
}

/// Checks a schedule line against the grammar.
///
/// Hour values are only checked for being two digits here. Their range is
/// enforced when the tokens are resolved.
///
/// # Returns
///
/// Returns `DataStructure` carrying `line_number` if the line does not match.
///
/// # Example
///
/// ```
/// use schedule_pay::schedule::validate_schedule;
///
/// assert!(validate_schedule("RENE=MO10:00-12:00,SU20:00-21:00", 1).is_ok());
/// assert!(validate_schedule("RENE=MO10:00-12:00,", 1).is_err());
/// ```
pub fn validate_schedule(line: &str, line_number: usize) -> EngineResult<()> {
    if is_valid_schedule(line) {
        Ok(())
    } else {
        debug!(line_number, "Schedule line does not match the grammar");
        Err(EngineError::DataStructure { line_number })
    }
}
