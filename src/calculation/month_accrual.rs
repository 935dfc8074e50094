//! Whole-month salary accrual.
//!
//! This is the coarse of the two accrual models: it counts tenure in whole
//! calendar months, with the hire month counting as one accrued month
//! regardless of the day-of-month the employee started. The day-level
//! model in [`super::day_accrual`] refines this into calendar days.

use rust_decimal::Decimal;

use crate::models::{CompensationInput, MonthAccrualResult};

use super::calendar::months_spanned;

/// Computes whole-month accrual from start date to as-of date.
///
/// `total_salary_owed` is the monthly salary multiplied by the number of
/// months spanned; `remaining_salary` subtracts what was already paid this
/// month and may be negative, signaling overpayment.
///
/// Total over the documented domain (`as_of_date >= start_date`,
/// non-negative amounts); inputs outside it are the caller's
/// responsibility and are rejected by [`CompensationInput::validate`] at
/// the API boundary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_month_accrual;
/// use payroll_engine::models::CompensationInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = CompensationInput {
///     monthly_salary: Decimal::new(3000, 0),
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     as_of_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     salary_paid_this_month: Decimal::new(3000, 0),
/// };
/// let result = calculate_month_accrual(&input);
/// assert_eq!(result.total_months, 3);
/// assert_eq!(result.total_salary_owed, Decimal::new(9000, 0));
/// assert_eq!(result.remaining_salary, Decimal::new(6000, 0));
/// ```
pub fn calculate_month_accrual(input: &CompensationInput) -> MonthAccrualResult {
    let total_months =
        u32::try_from(months_spanned(input.start_date, input.as_of_date)).unwrap_or(0);

    let total_salary_owed = input.monthly_salary * Decimal::from(total_months);
    let remaining_salary = total_salary_owed - input.salary_paid_this_month;

    MonthAccrualResult {
        total_months,
        total_salary_owed,
        remaining_salary,
        monthly_salary: input.monthly_salary,
        salary_paid_this_month: input.salary_paid_this_month,
    }
}
