//! Employee record model.
//!
//! This module defines [`EmployeeRecord`], the validated result of
//! processing one schedule line.

use super::{DayPayment, PaymentLine, WorkSchedule};

/// One employee's validated schedule and the amount owed for it.
///
/// Records are only produced by
/// [`process_line`](crate::calculation::process_line), so every record
/// holds a schedule that passed validation and an amount computed from it.
/// The fields cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    name: String,
    schedule: WorkSchedule,
    amount: u32,
    breakdown: Vec<DayPayment>,
    line_number: usize,
}

impl EmployeeRecord {
    pub(crate) fn new(
        name: String,
        schedule: WorkSchedule,
        amount: u32,
        breakdown: Vec<DayPayment>,
        line_number: usize,
    ) -> Self {
        Self {
            name,
            schedule,
            amount,
            breakdown,
            line_number,
        }
    }

    /// Returns the employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the resolved day ranges.
    pub fn schedule(&self) -> &WorkSchedule {
        &self.schedule
    }

    /// Returns the amount owed, in USD.
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Returns the amount owed per day.
    pub fn breakdown(&self) -> &[DayPayment] {
        &self.breakdown
    }

    /// Returns the 1-based line number of the schedule.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Builds the reportable view of this record.
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_pay::calculation::process_line;
    ///
    /// let record = process_line("ASTRID=MO10:00-12:00,TH12:00-14:00,SU20:00-21:00", 2).unwrap();
    /// let line = record.to_payment_line("USD");
    /// assert_eq!(line.message(), "The amount to pay ASTRID is: 85 USD");
    /// ```
    pub fn to_payment_line(&self, currency: &str) -> PaymentLine {
        PaymentLine {
            name: self.name.clone(),
            amount: self.amount,
            currency: currency.to_string(),
            line_number: self.line_number,
            schedule: self.schedule.clone(),
            breakdown: self.breakdown.clone(),
        }
    }
}
