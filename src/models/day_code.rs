//! Day code model.
//!
//! This module defines the [`DayCode`] enum for the two-letter weekday
//! codes used in schedule lines (`MO`, `TU`, `WE`, `TH`, `FR`, `SA`, `SU`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents one day of the week as written in a schedule line.
///
/// The enum is closed, so a rate lookup can never see an unknown day.
///
/// # Example
///
/// ```
/// use schedule_pay::models::DayCode;
///
/// let day: DayCode = "SA".parse().unwrap();
/// assert_eq!(day, DayCode::Saturday);
/// assert_eq!(day.to_string(), "SA");
/// assert!(day.is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayCode {
    /// Monday (`MO`).
    #[serde(rename = "MO")]
    Monday,
    /// Tuesday (`TU`).
    #[serde(rename = "TU")]
    Tuesday,
    /// Wednesday (`WE`).
    #[serde(rename = "WE")]
    Wednesday,
    /// Thursday (`TH`).
    #[serde(rename = "TH")]
    Thursday,
    /// Friday (`FR`).
    #[serde(rename = "FR")]
    Friday,
    /// Saturday (`SA`).
    #[serde(rename = "SA")]
    Saturday,
    /// Sunday (`SU`).
    #[serde(rename = "SU")]
    Sunday,
}

/// Error returned when a string is not one of the seven day codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown day code: {0}")]
pub struct UnknownDayCode(pub String);

impl DayCode {
    /// All day codes in week order, Monday first.
    pub const ALL: [DayCode; 7] = [
        DayCode::Monday,
        DayCode::Tuesday,
        DayCode::Wednesday,
        DayCode::Thursday,
        DayCode::Friday,
        DayCode::Saturday,
        DayCode::Sunday,
    ];

    /// Returns the two-letter code for this day.
    pub const fn code(self) -> &'static str {
        match self {
            DayCode::Monday => "MO",
            DayCode::Tuesday => "TU",
            DayCode::Wednesday => "WE",
            DayCode::Thursday => "TH",
            DayCode::Friday => "FR",
            DayCode::Saturday => "SA",
            DayCode::Sunday => "SU",
        }
    }

    /// Returns the position of this day in the week, Monday being 0.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true for Saturday and Sunday.
    pub const fn is_weekend(self) -> bool {
        matches!(self, DayCode::Saturday | DayCode::Sunday)
    }
}

impl FromStr for DayCode {
    type Err = UnknownDayCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayCode::ALL
            .into_iter()
            .find(|day| day.code() == s)
            .ok_or_else(|| UnknownDayCode(s.to_string()))
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
