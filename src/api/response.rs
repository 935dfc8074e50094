//! Response types for the Payroll Accrual Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
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
        // Every engine error is a domain violation in the request, so they
        // all map to 400.
        let details = match &error {
            EngineError::AsOfBeforeStart { .. } => {
                "The as-of date must fall on or after the employee's start date"
            }
            EngineError::NegativeAmount { .. } => {
                "Monetary and numeric inputs must be zero or positive"
            }
        };
        ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::with_details("VALIDATION_ERROR", error.to_string(), details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_validation_error_has_code() {
        let error = ApiError::validation_error("bad input");
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.message, "bad input");
        assert!(error.details.is_none());
    }

    #[test]
    fn test_details_are_skipped_when_absent() {
        let error = ApiError::malformed_json("unexpected token");
        let json = serde_json::to_string(&error).unwrap();
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_engine_error_maps_to_bad_request() {
        let engine_error = EngineError::AsOfBeforeStart {
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            as_of_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        };
        let response: ApiErrorResponse = engine_error.into();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
        assert!(response.error.message.contains("2025-01-15"));
        assert!(
            response
                .error
                .details
                .as_deref()
                .unwrap()
                .contains("start date")
        );
    }

    #[test]
    fn test_negative_amount_details_explain_the_constraint() {
        use rust_decimal::Decimal;

        let engine_error = EngineError::NegativeAmount {
            field: "monthly_salary".to_string(),
            value: Decimal::NEGATIVE_ONE,
        };
        let response: ApiErrorResponse = engine_error.into();

        assert_eq!(response.error.code, "VALIDATION_ERROR");
        assert!(response.error.message.contains("monthly_salary"));
        assert!(
            response
                .error
                .details
                .as_deref()
                .unwrap()
                .contains("zero or positive")
        );
    }

    #[test]
    fn test_with_details_serializes_all_fields() {
        let error = ApiError::with_details("VALIDATION_ERROR", "bad input", "more context");
        let json: serde_json::Value = serde_json::to_value(&error).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "bad input");
        assert_eq!(json["details"], "more context");
    }
}
