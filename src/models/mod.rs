//! Core data models for the schedule pay engine.
//!
//! This module contains all the domain models used throughout the engine.

mod batch_report;
mod calculation_result;
mod day_code;
mod employee;
mod shift;

pub use batch_report::{BatchHalt, BatchReport, SkippedLine};
pub use calculation_result::{DayPayment, PaymentLine};
pub use day_code::{DayCode, UnknownDayCode};
pub use employee::EmployeeRecord;
pub use shift::{DayRange, HOUR_UPPER_BOUND, WorkSchedule};
