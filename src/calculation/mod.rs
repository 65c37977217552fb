//! Pay calculation logic for the schedule pay engine.
//!
//! This module contains the fixed hourly rate table, the expansion of day
//! ranges into hour occupancy vectors, the reduction of those vectors to an
//! amount, and [`process_line`], which runs the full pipeline for one
//! schedule line.

mod occupancy;
mod pay_amount;
mod pipeline;
mod rate_table;

pub use occupancy::{DayOccupancy, OccupancyVector, expand_occupancy};
pub use pay_amount::{PayAmountResult, calculate_amount, calculate_breakdown};
pub use pipeline::process_line;
pub use rate_table::{HOURS_PER_DAY, RATE_TABLE, RateTable};
