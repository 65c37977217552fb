//! Hour occupancy expansion.
//!
//! This module turns each [`DayRange`] of a schedule into a 24-slot 0/1
//! vector marking the hours worked on that day.

use serde::Serialize;

use crate::models::{DayCode, DayRange, WorkSchedule};

use super::HOURS_PER_DAY;

/// A 24-slot vector, indexed by hour of day, holding 1 for worked hours
/// and 0 elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OccupancyVector([u8; HOURS_PER_DAY]);

impl OccupancyVector {
    /// Marks the hours `start_hour..end_hour`.
    ///
    /// Hours past the end of the day are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use schedule_pay::calculation::OccupancyVector;
    ///
    /// let vector = OccupancyVector::from_hours(1, 3);
    /// assert_eq!(&vector.as_slice()[..4], &[0, 1, 1, 0]);
    /// assert_eq!(vector.span(), Some((1, 3)));
    /// ```
    pub fn from_hours(start_hour: u8, end_hour: u8) -> Self {
        let mut slots = [0; HOURS_PER_DAY];
        for (hour, slot) in slots.iter_mut().enumerate() {
            if (usize::from(start_hour)..usize::from(end_hour)).contains(&hour) {
                *slot = 1;
            }
        }
        Self(slots)
    }

    /// Returns the 24 slots.
    pub fn as_slice(&self) -> &[u8; HOURS_PER_DAY] {
        &self.0
    }

    /// Returns the number of worked hours.
    pub fn hours_worked(&self) -> u32 {
        self.0.iter().map(|slot| u32::from(*slot)).sum()
    }

    /// Returns the first worked hour and the hour after the last one, or
    /// `None` if no hour is set.
    pub fn span(&self) -> Option<(u8, u8)> {
        let first = self.0.iter().position(|slot| *slot == 1)?;
        let last = self.0.iter().rposition(|slot| *slot == 1)?;
        // Both indexes are below HOURS_PER_DAY so they fit in a u8.
        Some((first as u8, last as u8 + 1))
    }
}

impl From<&DayRange> for OccupancyVector {
    fn from(range: &DayRange) -> Self {
        Self::from_hours(range.start_hour(), range.end_hour())
    }
}

/// The occupancy vector of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayOccupancy {
    /// The day the vector belongs to.
    pub day: DayCode,
    /// The worked hours of that day.
    pub hours: OccupancyVector,
}

/// Expands every day of a schedule into its occupancy vector.
///
/// Days keep the schedule's order. The expansion cannot fail: a
/// [`WorkSchedule`] only holds validated ranges.
pub fn expand_occupancy(schedule: &WorkSchedule) -> Vec<DayOccupancy> {
    schedule
        .iter()
        .map(|range| DayOccupancy {
            day: range.day(),
            hours: OccupancyVector::from(range),
        })
        .collect()
}
