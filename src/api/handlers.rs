//! HTTP request handlers for the Payroll Accrual Engine API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! handler validates the request against the engine's documented input
//! domain, then delegates to the pure calculators.

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_day_accrual, calculate_depreciation, calculate_month_accrual, calculate_percentage,
};
use crate::models::{
    CompensationInput, DayAccrualResult, DepreciationInput, Employee, EmployeeCategory,
    MonthAccrualResult,
};

use super::request::{CompensationRequest, DepreciationRequest, EmployeeAccrualRequest};
use super::response::{ApiError, ApiErrorResponse};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new()
        .route("/accrual/month", post(month_accrual_handler))
        .route("/accrual/day", post(day_accrual_handler))
        .route("/accrual/employee", post(employee_accrual_handler))
        .route("/assets/book-value", post(book_value_handler))
}

/// Combined accrual report for a single employee, as returned by
/// `POST /accrual/employee`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeAccrualReport {
    /// The employee the report was computed for.
    pub employee_id: String,
    /// The employee's workshop role.
    pub category: EmployeeCategory,
    /// Whole-month accrual.
    pub month: MonthAccrualResult,
    /// Day-level accrual and reconciliation.
    pub day: DayAccrualResult,
    /// Share of the monthly salary already paid, for progress displays.
    pub percent_of_month_paid: Decimal,
}

/// Maps a JSON extraction rejection to an API error body.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn ok_json<T: Serialize>(body: T) -> axum::response::Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /accrual/month.
async fn month_accrual_handler(
    payload: Result<Json<CompensationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing month accrual request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let input: CompensationInput = request.into();
    if let Err(err) = input.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Validation failed");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let result = calculate_month_accrual(&input);
    info!(
        correlation_id = %correlation_id,
        total_months = result.total_months,
        remaining_salary = %result.remaining_salary,
        "Month accrual computed"
    );
    ok_json(result)
}

/// Handler for POST /accrual/day.
async fn day_accrual_handler(
    payload: Result<Json<CompensationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing day accrual request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let input: CompensationInput = request.into();
    if let Err(err) = input.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Validation failed");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let result = calculate_day_accrual(&input);
    info!(
        correlation_id = %correlation_id,
        total_unpaid_days = result.total_unpaid_days,
        overpaid_amount = %result.overpaid_amount,
        "Day accrual computed"
    );
    ok_json(result)
}

/// Handler for POST /accrual/employee.
///
/// Accepts a stored employee record plus an explicit as-of date and returns
/// both accrual granularities in one report.
async fn employee_accrual_handler(
    payload: Result<Json<EmployeeAccrualRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee accrual request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let as_of_date = request.as_of_date;
    let employee: Employee = request.employee.into();
    let input = employee.compensation_input(as_of_date);
    if let Err(err) = input.validate() {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %employee.id,
            error = %err,
            "Validation failed"
        );
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let report = EmployeeAccrualReport {
        employee_id: employee.id.clone(),
        category: employee.category,
        month: calculate_month_accrual(&input),
        day: calculate_day_accrual(&input),
        percent_of_month_paid: calculate_percentage(
            input.salary_paid_this_month,
            input.monthly_salary,
        ),
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        total_months = report.month.total_months,
        total_unpaid_days = report.day.total_unpaid_days,
        "Employee accrual computed"
    );
    ok_json(report)
}

/// Handler for POST /assets/book-value.
async fn book_value_handler(
    payload: Result<Json<DepreciationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing book value request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let input: DepreciationInput = request.into();
    if let Err(err) = input.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Validation failed");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let result = calculate_depreciation(&input);
    info!(
        correlation_id = %correlation_id,
        book_value = %result.book_value,
        "Book value computed"
    );
    ok_json(result)
}
