//! Request types for the Payroll Accrual Engine API.
//!
//! This module defines the JSON request structures for the accrual and
//! depreciation endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CompensationInput, DepreciationInput, Employee, EmployeeCategory};

/// Request body for the `/accrual/month` and `/accrual/day` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompensationRequest {
    /// The employee's fixed monthly salary.
    pub monthly_salary: Decimal,
    /// The date the employee started employment.
    pub start_date: NaiveDate,
    /// The reference date up to which accrual is computed.
    pub as_of_date: NaiveDate,
    /// The amount already paid in the as-of month.
    #[serde(default)]
    pub salary_paid_this_month: Decimal,
}

/// Request body for the `/accrual/employee` endpoint.
///
/// Carries the employee record as stored by the persistence layer plus the
/// explicit as-of date the accrual should be computed up to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeAccrualRequest {
    /// The employee record.
    pub employee: EmployeeRequest,
    /// The reference date up to which accrual is computed.
    pub as_of_date: NaiveDate,
}

/// Employee information in an accrual request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The workshop role the employee belongs to.
    pub category: EmployeeCategory,
    /// The employee's fixed monthly salary.
    pub monthly_salary: Decimal,
    /// The date the employee started employment.
    pub start_date: NaiveDate,
    /// The amount already paid in the current month.
    #[serde(default)]
    pub salary_paid_this_month: Decimal,
}

/// Request body for the `/assets/book-value` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepreciationRequest {
    /// The asset's purchase value.
    pub initial_value: Decimal,
    /// Depreciation rate as a fraction per year.
    pub depreciation_rate: Decimal,
    /// Years the asset has been in use.
    pub years_in_use: Decimal,
}

impl From<CompensationRequest> for CompensationInput {
    fn from(req: CompensationRequest) -> Self {
        CompensationInput {
            monthly_salary: req.monthly_salary,
            start_date: req.start_date,
            as_of_date: req.as_of_date,
            salary_paid_this_month: req.salary_paid_this_month,
        }
    }
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            category: req.category,
            monthly_salary: req.monthly_salary,
            start_date: req.start_date,
            salary_paid_this_month: req.salary_paid_this_month,
        }
    }
}

impl From<DepreciationRequest> for DepreciationInput {
    fn from(req: DepreciationRequest) -> Self {
        DepreciationInput {
            initial_value: req.initial_value,
            depreciation_rate: req.depreciation_rate,
            years_in_use: req.years_in_use,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paid_this_month_defaults_to_zero() {
        let json = r#"{
            "monthly_salary": "3000",
            "start_date": "2025-01-15",
            "as_of_date": "2025-01-31"
        }"#;

        let request: CompensationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.salary_paid_this_month, Decimal::ZERO);
    }

    #[test]
    fn test_compensation_request_converts_to_input() {
        let request = CompensationRequest {
            monthly_salary: Decimal::new(3000, 0),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            as_of_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            salary_paid_this_month: Decimal::new(500, 0),
        };

        let input: CompensationInput = request.clone().into();
        assert_eq!(input.monthly_salary, request.monthly_salary);
        assert_eq!(input.as_of_date, request.as_of_date);
    }

    #[test]
    fn test_employee_request_converts_to_employee() {
        let json = r#"{
            "employee": {
                "id": "emp_007",
                "category": "finishing",
                "monthly_salary": "2600",
                "start_date": "2024-06-01",
                "salary_paid_this_month": "1300"
            },
            "as_of_date": "2025-01-31"
        }"#;

        let request: EmployeeAccrualRequest = serde_json::from_str(json).unwrap();
        let employee: Employee = request.employee.into();

        assert_eq!(employee.id, "emp_007");
        assert_eq!(employee.category, EmployeeCategory::Finishing);
        assert_eq!(employee.salary_paid_this_month, Decimal::new(1300, 0));
    }
}
