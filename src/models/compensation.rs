//! Compensation input model.
//!
//! This module defines [`CompensationInput`], the four caller-supplied
//! values every accrual calculation is computed from.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The inputs to an accrual calculation.
///
/// The accrual calculators are total over the documented domain
/// (`as_of_date >= start_date`, non-negative amounts) and do not check
/// their inputs; [`CompensationInput::validate`] is the check the API
/// boundary performs before handing the input to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationInput {
    /// The employee's fixed monthly salary.
    pub monthly_salary: Decimal,
    /// The date the employee started employment.
    pub start_date: NaiveDate,
    /// The reference date up to which accrual is computed. Always supplied
    /// explicitly by the caller, never read from a clock.
    pub as_of_date: NaiveDate,
    /// The amount already paid to the employee in the as-of month.
    pub salary_paid_this_month: Decimal,
}

impl CompensationInput {
    /// Checks that this input lies within the engine's documented domain.
    ///
    /// Rejects an as-of date earlier than the start date and negative
    /// monetary amounts. The calculators themselves do not repeat these
    /// checks.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AsOfBeforeStart`] or
    /// [`EngineError::NegativeAmount`] describing the offending field.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::CompensationInput;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let input = CompensationInput {
    ///     monthly_salary: Decimal::new(3000, 0),
    ///     start_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
    ///     as_of_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
    ///     salary_paid_this_month: Decimal::ZERO,
    /// };
    /// assert!(input.validate().is_ok());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.as_of_date < self.start_date {
            return Err(EngineError::AsOfBeforeStart {
                start_date: self.start_date,
                as_of_date: self.as_of_date,
            });
        }
        if self.monthly_salary.is_sign_negative() {
            return Err(EngineError::NegativeAmount {
                field: "monthly_salary".to_string(),
                value: self.monthly_salary,
            });
        }
        if self.salary_paid_this_month.is_sign_negative() {
            return Err(EngineError::NegativeAmount {
                field: "salary_paid_this_month".to_string(),
                value: self.salary_paid_this_month,
            });
        }
        Ok(())
    }
}
