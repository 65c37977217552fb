//! Day range and work schedule models.
//!
//! This module defines [`DayRange`], one day's working hours, and
//! [`WorkSchedule`], the ordered set of day ranges for one employee.

use serde::Serialize;

use crate::error::{EngineError, EngineResult};

use super::DayCode;

/// Exclusive upper bound for start and end hours.
///
/// Hour 23 is rejected even as an end hour. This reproduces the observed
/// behaviour of the schedules this engine replaces and is pending
/// confirmation before being widened to 24.
pub const HOUR_UPPER_BOUND: u8 = 23;

/// The working hours of one employee on one day.
///
/// A `DayRange` covers the hours `start_hour..end_hour`. It can only be
/// built through [`DayRange::new`], which guarantees that both hours are
/// below [`HOUR_UPPER_BOUND`] and that the start is before the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayRange {
    day: DayCode,
    start_hour: u8,
    end_hour: u8,
}

impl DayRange {
    /// Creates a validated day range.
    ///
    /// # Returns
    ///
    /// Returns the range, or an error carrying `line_number` if:
    /// - either hour is not below [`HOUR_UPPER_BOUND`] (`InvalidHour`)
    /// - the start hour is not strictly before the end hour (`LimitHour`)
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_pay::error::EngineError;
    /// use schedule_pay::models::{DayCode, DayRange};
    ///
    /// let range = DayRange::new(DayCode::Monday, 10, 12, 1).unwrap();
    /// assert_eq!(range.hours(), 2);
    ///
    /// let error = DayRange::new(DayCode::Monday, 14, 11, 1).unwrap_err();
    /// assert!(matches!(error, EngineError::LimitHour { line_number: 1 }));
    /// ```
    pub fn new(day: DayCode, start_hour: u8, end_hour: u8, line_number: usize) -> EngineResult<Self> {
        if start_hour >= HOUR_UPPER_BOUND || end_hour >= HOUR_UPPER_BOUND {
            return Err(EngineError::InvalidHour { line_number });
        }
        if start_hour >= end_hour {
            return Err(EngineError::LimitHour { line_number });
        }
        Ok(Self {
            day,
            start_hour,
            end_hour,
        })
    }

    /// Returns the day this range belongs to.
    pub fn day(&self) -> DayCode {
        self.day
    }

    /// Returns the first worked hour.
    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    /// Returns the hour at which work stops (exclusive).
    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    /// Returns the number of hours covered by the range.
    pub fn hours(&self) -> u32 {
        u32::from(self.end_hour - self.start_hour)
    }
}

/// The ordered day ranges of one employee.
///
/// Days keep the order in which they first appeared in the schedule line,
/// and no day appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WorkSchedule {
    ranges: Vec<DayRange>,
}

impl WorkSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the schedule already holds a range for `day`.
    pub fn contains_day(&self, day: DayCode) -> bool {
        self.ranges.iter().any(|r| r.day == day)
    }

    /// Returns the range recorded for `day`, if any.
    pub fn get(&self, day: DayCode) -> Option<&DayRange> {
        self.ranges.iter().find(|r| r.day == day)
    }

    /// Iterates the ranges in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DayRange> {
        self.ranges.iter()
    }

    /// Returns the number of days in the schedule.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns true if the schedule has no days.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the total number of hours worked across all days.
    pub fn total_hours(&self) -> u32 {
        self.ranges.iter().map(DayRange::hours).sum()
    }

    /// Adds a range whose day is not yet present.
    ///
    /// Callers check [`WorkSchedule::contains_day`] first so the duplicate
    /// error can be reported before the range itself is validated.
    pub(crate) fn push(&mut self, range: DayRange) {
        debug_assert!(!self.contains_day(range.day));
        self.ranges.push(range);
    }
}
