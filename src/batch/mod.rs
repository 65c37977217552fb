//! Batch processing for the schedule pay engine.
//!
//! This module reads schedule files line by line, tracks employee names
//! across the file, and renders the resulting [`BatchReport`](crate::models::BatchReport)
//! as text or JSON.

mod display;
mod processor;
mod runner;

pub use display::{write_json_report, write_text_report};
pub use processor::BatchProcessor;
pub use runner::{RunOverrides, run_report};
