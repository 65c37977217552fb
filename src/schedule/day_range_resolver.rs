//! Day range resolution.
//!
//! This module converts raw `DDHH:MM-HH:MM` tokens into a validated
//! [`WorkSchedule`].

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{DayCode, DayRange, WorkSchedule};

/// Parses a two-digit hour field. Signs and other characters are refused.
fn parse_hour(field: Option<&str>) -> Option<u8> {
    let field = field?;
    if field.len() == 2 && field.bytes().all(|b| b.is_ascii_digit()) {
        field.parse().ok()
    } else {
        None
    }
}

/// Resolves day range tokens into a work schedule.
///
/// Each token is read positionally: the day code from characters 1-2, the
/// start hour from characters 3-4 and the end hour from characters 9-10.
/// Tokens are processed left to right and the first problem found stops
/// the resolution:
///
/// 1. a day already seen earlier in the line fails with `DuplicatedDay`,
///    before the hours of that token are looked at;
/// 2. an hour outside `0..23` fails with `InvalidHour`;
/// 3. a start hour not before the end hour fails with `LimitHour`.
///
/// Tokens too short to hold these fields, or with an unknown day or
/// non-numeric hours, fail with `DataStructure`. All errors carry
/// `line_number`.
///
/// # Example
///
/// ```
/// use schedule_pay::error::EngineError;
/// use schedule_pay::models::DayCode;
/// use schedule_pay::schedule::resolve_day_ranges;
///
/// let schedule = resolve_day_ranges(&["MO10:00-12:00", "SA14:00-18:00"], 1).unwrap();
/// assert_eq!(schedule.get(DayCode::Saturday).unwrap().start_hour(), 14);
///
/// let error = resolve_day_ranges(&["MO10:00-12:00", "MO08:00-09:00"], 7).unwrap_err();
/// assert!(matches!(error, EngineError::DuplicatedDay { line_number: 7 }));
/// ```
pub fn resolve_day_ranges<S: AsRef<str>>(
    tokens: &[S],
    line_number: usize,
) -> EngineResult<WorkSchedule> {
    let mut schedule = WorkSchedule::new();

    for token in tokens {
        let token = token.as_ref();

        let day: DayCode = token
            .get(0..2)
            .and_then(|code| code.parse().ok())
            .ok_or(EngineError::DataStructure { line_number })?;

        if schedule.contains_day(day) {
            debug!(line_number, %day, "Duplicated day in schedule");
            return Err(EngineError::DuplicatedDay { line_number });
        }

        let (Some(start_hour), Some(end_hour)) =
            (parse_hour(token.get(2..4)), parse_hour(token.get(8..10)))
        else {
            return Err(EngineError::DataStructure { line_number });
        };

        let range = DayRange::new(day, start_hour, end_hour, line_number).inspect_err(|err| {
            debug!(line_number, %day, start_hour, end_hour, error = %err, "Rejected day range");
        })?;
        schedule.push(range);
    }

    Ok(schedule)
}
