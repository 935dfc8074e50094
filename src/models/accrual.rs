//! Accrual result models.
//!
//! This module contains the [`MonthAccrualResult`] and [`DayAccrualResult`]
//! records returned by the two accrual calculators. Both describe the same
//! underlying fact (tenure) at different granularities: whole months versus
//! calendar days.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whole-month accrual for an employee, from start date to as-of date.
///
/// This is the coarse model: the hire month counts as one full accrued
/// month regardless of the day-of-month the employee started. Use
/// [`DayAccrualResult`] when day-level precision matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthAccrualResult {
    /// Number of calendar months accrued, hire month inclusive.
    pub total_months: u32,
    /// `monthly_salary × total_months`.
    pub total_salary_owed: Decimal,
    /// `total_salary_owed − salary_paid_this_month`. Negative values signal
    /// overpayment.
    pub remaining_salary: Decimal,
    /// The monthly salary the calculation was based on.
    pub monthly_salary: Decimal,
    /// The amount already paid in the as-of month.
    pub salary_paid_this_month: Decimal,
}

/// Day-level accrual and reconciliation for an employee.
///
/// Distributes the total obligation across calendar days and exposes how
/// much of it is concretely unpaid and how much was overpaid. Money fields
/// are rounded to 2 decimal places at this boundary; intermediate
/// arithmetic uses full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAccrualResult {
    /// Number of calendar months accrued, hire month inclusive.
    pub total_months: u32,
    /// Calendar length of the as-of month (28–31, leap aware).
    pub days_in_current_month: u32,
    /// Days worked in the as-of month, start day inclusive.
    pub days_worked_this_month: u32,
    /// `monthly_salary / days_in_current_month`, rounded to 2 dp.
    pub daily_rate: Decimal,
    /// Calendar days elapsed since hire: the day-counts of all prior
    /// months plus the partial current month.
    pub total_days_should_work: u32,
    /// Days the employee should have been compensated for. Equal to
    /// `total_days_should_work` in this model.
    pub total_days_should_be_paid: u32,
    /// Days the payment made this month covers, at this month's daily rate.
    pub days_paid_for: u32,
    /// Unpaid days carried over from months before the as-of month.
    pub unpaid_days_from_previous_months: u32,
    /// Total days accrued but not yet paid for.
    pub total_unpaid_days: u32,
    /// `daily_rate × days_worked_this_month`, rounded to 2 dp.
    pub earned_this_month: Decimal,
    /// Amount paid beyond what was earned this month, floored at zero.
    pub overpaid_amount: Decimal,
    /// The monthly salary the calculation was based on.
    pub monthly_salary: Decimal,
    /// The amount already paid in the as-of month.
    pub salary_paid_this_month: Decimal,
}
