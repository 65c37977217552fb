//! Schedule line parsing for the schedule pay engine.
//!
//! This module validates raw schedule lines against the grammar, splits
//! them into name and tokens, and resolves the tokens into a
//! [`WorkSchedule`](crate::models::WorkSchedule).

mod day_range_resolver;
mod entry_parser;
mod validator;

pub use day_range_resolver::resolve_day_ranges;
pub use entry_parser::{ScheduleEntry, parse_schedule_entry};
pub use validator::{is_valid_schedule, validate_schedule};
