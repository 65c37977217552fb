//! Payment result models for the schedule pay engine.
//!
//! This module contains the [`DayPayment`] breakdown entry and the
//! [`PaymentLine`] that reports one employee's payment.

use serde::Serialize;

use super::{DayCode, WorkSchedule};

/// The amount owed for one day of a schedule.
///
/// # Example
///
/// ```
/// use schedule_pay::models::{DayCode, DayPayment};
///
/// let payment = DayPayment {
///     day: DayCode::Saturday,
///     hours: 4,
///     amount: 80,
/// };
/// assert_eq!(payment.amount, 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayPayment {
    /// The day worked.
    pub day: DayCode,
    /// The number of hours worked that day.
    pub hours: u32,
    /// The amount owed for that day.
    pub amount: u32,
}

/// A reported payment for one employee.
///
/// This is the serializable view of an
/// [`EmployeeRecord`](super::EmployeeRecord), used for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentLine {
    /// The employee name.
    pub name: String,
    /// The total amount owed.
    pub amount: u32,
    /// The currency label of the amount.
    pub currency: String,
    /// The 1-based line of the schedule in its source.
    pub line_number: usize,
    /// The resolved day ranges.
    pub schedule: WorkSchedule,
    /// The amount owed per day.
    pub breakdown: Vec<DayPayment>,
}

impl PaymentLine {
    /// Formats the payment as a sentence, e.g.
    /// `The amount to pay RENE is: 215 USD`.
    pub fn message(&self) -> String {
        format!(
            "The amount to pay {} is: {} {}",
            self.name, self.amount, self.currency
        )
    }
}
