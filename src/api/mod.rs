//! HTTP API module for the schedule pay engine.
//!
//! This module provides REST endpoints that calculate payments for single
//! schedule lines and for whole batches.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchRequest, CalculationRequest};
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
