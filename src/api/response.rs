//! Response types for the schedule pay API.
//!
//! This module defines the success and error response structures and the
//! mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::PaymentLine;

/// Response body for a successful `/calculate` request.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    /// Correlation ID of the request.
    pub id: Uuid,
    /// When the calculation was made.
    pub calculated_at: DateTime<Utc>,
    /// The computed payment.
    #[serde(flatten)]
    pub payment: PaymentLine,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an error response for a schedule line that was rejected.
    fn invalid_schedule(code: &str, error: &EngineError, details: &str) -> Self {
        Self::with_details(code, error.to_string(), details)
    }
}

/// API error with HTTP status code.
///
/// Converts into a JSON response carrying `status` and the [`ApiError`]
/// body. Line errors map to 422; anything else is an internal error.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let (status, body) = match &error {
            EngineError::DataStructure { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::invalid_schedule(
                    "DATA_STRUCTURE_ERROR",
                    &error,
                    "Expected NAME=DDHH:00-HH:00 with comma-separated days",
                ),
            ),
            EngineError::DuplicatedDay { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::invalid_schedule(
                    "DUPLICATED_DAY",
                    &error,
                    "Each day may appear only once per schedule",
                ),
            ),
            EngineError::InvalidHour { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::invalid_schedule(
                    "INVALID_HOUR",
                    &error,
                    "Start and end hours must be between 00 and 22",
                ),
            ),
            EngineError::LimitHour { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::invalid_schedule(
                    "LIMIT_HOUR",
                    &error,
                    "The start hour must be before the end hour",
                ),
            ),
            // Only line errors come out of a single-line calculation.
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("INTERNAL_ERROR", "Internal server error", error.to_string()),
            ),
        };

        ApiErrorResponse {
            status,
            error: body,
        }
    }
}
