//! Pay amount calculation.
//!
//! This module reduces occupancy vectors against the [`RATE_TABLE`] to the
//! amount owed to an employee.

use crate::models::DayPayment;

use super::{DayOccupancy, RATE_TABLE};

/// The result of a pay calculation, with its per-day breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayAmountResult {
    /// The amount owed in USD.
    pub total: u32,
    /// The amount owed for each day, in schedule order.
    pub days: Vec<DayPayment>,
}

/// Calculates the pay owed for one day.
fn day_payment(occupancy: &DayOccupancy) -> DayPayment {
    let rates = RATE_TABLE.rates_for(occupancy.day);
    let amount = occupancy
        .hours
        .as_slice()
        .iter()
        .zip(rates.iter())
        .map(|(slot, rate)| u32::from(*slot) * rate)
        .sum();

    DayPayment {
        day: occupancy.day,
        hours: occupancy.hours.hours_worked(),
        amount,
    }
}

/// Calculates the total amount owed for a set of occupancy vectors.
///
/// Each worked hour is paid at the rate of its day and hour. Days missing
/// from `occupancy` contribute nothing.
///
/// # Example
///
/// ```
/// use schedule_pay::calculation::{calculate_amount, expand_occupancy};
/// use schedule_pay::schedule::resolve_day_ranges;
///
/// let schedule = resolve_day_ranges(&["SA14:00-18:00"], 1).unwrap();
/// assert_eq!(calculate_amount(&expand_occupancy(&schedule)), 80);
/// ```
pub fn calculate_amount(occupancy: &[DayOccupancy]) -> u32 {
    occupancy.iter().map(|day| day_payment(day).amount).sum()
}

/// Calculates the total amount owed together with the amount for each day.
pub fn calculate_breakdown(occupancy: &[DayOccupancy]) -> PayAmountResult {
    let days: Vec<DayPayment> = occupancy.iter().map(day_payment).collect();
    let total = days.iter().map(|d| d.amount).sum();
    PayAmountResult { total, days }
}
