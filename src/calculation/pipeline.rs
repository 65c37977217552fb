//! Schedule line processing.
//!
//! This module runs the whole pipeline for one schedule line: grammar
//! validation, splitting, day range resolution, occupancy expansion and
//! pay calculation.

use tracing::debug;

use crate::error::EngineResult;
use crate::models::EmployeeRecord;
use crate::schedule::{parse_schedule_entry, resolve_day_ranges, validate_schedule};

use super::{calculate_breakdown, expand_occupancy};

/// Processes one schedule line into an employee record.
///
/// The line must already be trimmed. Processing stops at the first error,
/// and no record is produced in that case. Errors are checked stage by
/// stage, so a line with several problems reports the first one found in
/// this order: `DataStructure`, then per token `DuplicatedDay`,
/// `InvalidHour` and `LimitHour`.
///
/// # Arguments
///
/// * `raw` - The schedule line, e.g. `RENE=MO10:00-12:00`
/// * `line_number` - The 1-based line number reported in errors
///
/// # Examples
///
/// ```
/// use schedule_pay::calculation::process_line;
///
/// let record = process_line(
///     "RENE=MO10:00-12:00,TU10:00-12:00,TH01:00-03:00,SA14:00-18:00,SU20:00-21:00",
///     1,
/// )
/// .unwrap();
/// assert_eq!(record.name(), "RENE");
/// assert_eq!(record.amount(), 215);
/// ```
pub fn process_line(raw: &str, line_number: usize) -> EngineResult<EmployeeRecord> {
    validate_schedule(raw, line_number)?;

    let entry = parse_schedule_entry(raw);
    let schedule = resolve_day_ranges(&entry.tokens, line_number)?;
    let occupancy = expand_occupancy(&schedule);
    let pay = calculate_breakdown(&occupancy);

    debug!(
        line_number,
        name = entry.name,
        days = schedule.len(),
        hours = schedule.total_hours(),
        amount = pay.total,
        "Processed schedule line"
    );

    Ok(EmployeeRecord::new(
        entry.name.to_string(),
        schedule,
        pay.total,
        pay.days,
        line_number,
    ))
}
