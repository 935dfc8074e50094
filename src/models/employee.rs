//! Employee model and related types.
//!
//! This module defines the Employee struct and EmployeeCategory enum
//! representing workers in the payroll system. The engine itself only
//! needs the four compensation fields; the record shape matches what the
//! surrounding application stores per employee.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CompensationInput;

/// The workshop role an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeCategory {
    /// Carpentry and joinery work.
    Carpentry,
    /// Upholstery and fabric work.
    Upholstery,
    /// Sanding, staining, and finishing.
    Finishing,
    /// Final assembly and quality checks.
    Assembly,
    /// Office and administrative staff.
    Administration,
}

/// An employee record as supplied by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The workshop role the employee belongs to.
    pub category: EmployeeCategory,
    /// The employee's fixed monthly salary.
    pub monthly_salary: Decimal,
    /// The date the employee started employment.
    pub start_date: NaiveDate,
    /// The amount already paid to the employee in the current month.
    #[serde(default)]
    pub salary_paid_this_month: Decimal,
}

impl Employee {
    /// Builds the accrual calculation input for this employee at a given
    /// as-of date.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmployeeCategory};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     category: EmployeeCategory::Carpentry,
    ///     monthly_salary: Decimal::new(3000, 0),
    ///     start_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
    ///     salary_paid_this_month: Decimal::ZERO,
    /// };
    /// let as_of = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    /// let input = employee.compensation_input(as_of);
    /// assert_eq!(input.as_of_date, as_of);
    /// ```
    pub fn compensation_input(&self, as_of_date: NaiveDate) -> CompensationInput {
        CompensationInput {
            monthly_salary: self.monthly_salary,
            start_date: self.start_date,
            as_of_date,
            salary_paid_this_month: self.salary_paid_this_month,
        }
    }
}
