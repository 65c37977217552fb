//! Weekly payment engine for day-coded employee schedules.
//!
//! This crate validates schedule lines such as
//! `RENE=MO10:00-12:00,SA14:00-18:00`, expands them into hourly occupancy
//! and prices every worked hour against a fixed day/hour rate table.
//!
//! ```
//! use schedule_pay::process_line;
//!
//! let record = process_line("ASTRID=MO10:00-12:00,TH12:00-14:00,SU20:00-21:00", 1).unwrap();
//! assert_eq!(record.amount(), 85);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod batch;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod schedule;

pub use calculation::process_line;
