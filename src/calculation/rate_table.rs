//! Hourly pay rate table.
//!
//! Rates are fixed per day and per hour of the day. The table is a single
//! process-wide constant, [`RATE_TABLE`].

use crate::models::DayCode;

/// Number of hourly slots in a day.
pub const HOURS_PER_DAY: usize = 24;

/// First hour of the daytime band (09:00).
const DAYTIME_START: usize = 9;

/// First hour of the evening band (18:00).
const EVENING_START: usize = 18;

/// Builds the 24 rates of one day from its three hour bands:
/// 00:00-09:00, 09:00-18:00 and 18:00-24:00.
const fn banded_rates(night: u32, daytime: u32, evening: u32) -> [u32; HOURS_PER_DAY] {
    let mut rates = [0; HOURS_PER_DAY];
    let mut hour = 0;
    while hour < HOURS_PER_DAY {
        rates[hour] = if hour < DAYTIME_START {
            night
        } else if hour < EVENING_START {
            daytime
        } else {
            evening
        };
        hour += 1;
    }
    rates
}

const WEEKDAY_RATES: [u32; HOURS_PER_DAY] = banded_rates(25, 15, 20);
const WEEKEND_RATES: [u32; HOURS_PER_DAY] = banded_rates(30, 20, 25);

/// Pay rate in USD for every day and hour of the week.
///
/// # Example
///
/// ```
/// use schedule_pay::calculation::RATE_TABLE;
/// use schedule_pay::models::DayCode;
///
/// assert_eq!(RATE_TABLE.rate(DayCode::Monday, 10), 15);
/// assert_eq!(RATE_TABLE.rate(DayCode::Sunday, 20), 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rates: [[u32; HOURS_PER_DAY]; DayCode::ALL.len()],
}

/// The standard rate table.
pub static RATE_TABLE: RateTable = RateTable::standard();

impl RateTable {
    /// Weekday and weekend rates, indexed by [`DayCode::index`].
    pub const fn standard() -> Self {
        let mut rates = [[0; HOURS_PER_DAY]; DayCode::ALL.len()];
        let mut i = 0;
        while i < DayCode::ALL.len() {
            let day = DayCode::ALL[i];
            rates[day.index()] = if day.is_weekend() {
                WEEKEND_RATES
            } else {
                WEEKDAY_RATES
            };
            i += 1;
        }
        Self { rates }
    }

    /// Returns the 24 hourly rates of `day`.
    pub fn rates_for(&self, day: DayCode) -> &[u32; HOURS_PER_DAY] {
        &self.rates[day.index()]
    }

    /// Returns the rate for `hour` on `day`, or 0 for an hour past the end
    /// of the day.
    pub fn rate(&self, day: DayCode, hour: usize) -> u32 {
        self.rates_for(day).get(hour).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_bands() {
        for day in &DayCode::ALL[..5] {
            assert_eq!(RATE_TABLE.rate(*day, 0), 25);
            assert_eq!(RATE_TABLE.rate(*day, 8), 25);
            assert_eq!(RATE_TABLE.rate(*day, 9), 15);
            assert_eq!(RATE_TABLE.rate(*day, 17), 15);
            assert_eq!(RATE_TABLE.rate(*day, 18), 20);
            assert_eq!(RATE_TABLE.rate(*day, 23), 20);
        }
    }

    #[test]
    fn test_weekend_bands() {
        for day in [DayCode::Saturday, DayCode::Sunday] {
            assert_eq!(RATE_TABLE.rate(day, 0), 30);
            assert_eq!(RATE_TABLE.rate(day, 8), 30);
            assert_eq!(RATE_TABLE.rate(day, 9), 20);
            assert_eq!(RATE_TABLE.rate(day, 17), 20);
            assert_eq!(RATE_TABLE.rate(day, 18), 25);
            assert_eq!(RATE_TABLE.rate(day, 23), 25);
        }
    }

    #[test]
    fn test_every_rate_is_positive() {
        for day in DayCode::ALL {
            assert!(RATE_TABLE.rates_for(day).iter().all(|r| *r > 0));
        }
    }

    #[test]
    fn test_rates_follow_weekend_flag() {
        for day in DayCode::ALL {
            let expected = if day.is_weekend() { 30 } else { 25 };
            assert_eq!(RATE_TABLE.rate(day, 0), expected, "day {day}");
        }
    }

    #[test]
    fn test_hour_past_end_of_day_is_zero() {
        assert_eq!(RATE_TABLE.rate(DayCode::Monday, 24), 0);
    }

    #[test]
    fn test_weekday_rate_sum() {
        // 9 * 25 + 9 * 15 + 6 * 20
        let total: u32 = RATE_TABLE.rates_for(DayCode::Wednesday).iter().sum();
        assert_eq!(total, 480);
    }
}
