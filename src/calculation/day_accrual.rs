//! Day-level salary accrual and reconciliation.
//!
//! This module refines the whole-month accrual model into calendar days:
//! it prorates the monthly salary into a daily rate for the as-of month,
//! counts the days the employee has accrued since their start date,
//! converts the amount paid this month into an equivalent day count, and
//! classifies the difference as unpaid days or overpayment.

use chrono::Datelike;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{CompensationInput, DayAccrualResult};

use super::calendar::{days_in_month, months_spanned};

/// Computes day-level accrual and reconciliation for an employee.
///
/// The total obligation is distributed across calendar days: every month
/// from the hire month up to (but excluding) the as-of month contributes
/// its full day-count, and the as-of month contributes the days worked so
/// far. The amount paid this month is converted into days at this month's
/// daily rate — even when part of that payment covers arrears accrued in a
/// different-length month, the current month's rate is used.
///
/// Money fields (`daily_rate`, `earned_this_month`, `overpaid_amount`) are
/// rounded to 2 decimal places at the result boundary; all intermediate
/// arithmetic keeps full precision.
///
/// Total over the documented domain (`as_of_date >= start_date`,
/// non-negative amounts); the API boundary validates before calling.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_day_accrual;
/// use payroll_engine::models::CompensationInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = CompensationInput {
///     monthly_salary: Decimal::new(3000, 0),
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
///     as_of_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
///     salary_paid_this_month: Decimal::ZERO,
/// };
/// let result = calculate_day_accrual(&input);
/// assert_eq!(result.days_worked_this_month, 17);
/// assert_eq!(result.daily_rate, Decimal::from_str("96.77").unwrap());
/// ```
pub fn calculate_day_accrual(input: &CompensationInput) -> DayAccrualResult {
    let start = input.start_date;
    let as_of = input.as_of_date;

    let total_months = u32::try_from(months_spanned(start, as_of)).unwrap_or(0);

    let days_in_current_month = days_in_month(as_of.year(), as_of.month());

    // Same hire month: inclusive of the start day. Past the hire month the
    // employee is assumed to have worked every day of the current month up
    // to and including the as-of day.
    let same_month = start.year() == as_of.year() && start.month() == as_of.month();
    let days_worked_this_month = if same_month {
        (i64::from(as_of.day()) - i64::from(start.day()) + 1).max(0) as u32
    } else {
        as_of.day()
    };

    let daily_rate = input.monthly_salary / Decimal::from(days_in_current_month);

    // Full day-counts of the months before the as-of month, hire month
    // included, plus the partial current month.
    let mut total_days_should_work: u32 = 0;
    let mut year = start.year();
    let mut month = start.month();
    for _ in 1..total_months {
        total_days_should_work += days_in_month(year, month);
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    total_days_should_work += days_worked_this_month;

    // Worked and owed days are definitionally equal in this model.
    let total_days_should_be_paid = total_days_should_work;

    // paid / daily_rate, computed as paid * days / salary so the division
    // is by the exact salary instead of an already-rounded quotient.
    let days_paid_for = if input.salary_paid_this_month > Decimal::ZERO
        && input.monthly_salary > Decimal::ZERO
    {
        (input.salary_paid_this_month * Decimal::from(days_in_current_month)
            / input.monthly_salary)
            .floor()
            .to_u32()
            .unwrap_or(0)
    } else {
        0
    };

    let unpaid_days_from_previous_months = (i64::from(total_days_should_be_paid)
        - i64::from(days_worked_this_month)
        - i64::from(days_paid_for))
    .max(0) as u32;

    let total_unpaid_days =
        (i64::from(total_days_should_be_paid) - i64::from(days_paid_for)).max(0) as u32;

    let earned_this_month = daily_rate * Decimal::from(days_worked_this_month);

    let overpaid_amount =
        (input.salary_paid_this_month - earned_this_month).max(Decimal::ZERO);

    DayAccrualResult {
        total_months,
        days_in_current_month,
        days_worked_this_month,
        daily_rate: daily_rate.round_dp(2),
        total_days_should_work,
        total_days_should_be_paid,
        days_paid_for,
        unpaid_days_from_previous_months,
        total_unpaid_days,
        earned_this_month: earned_this_month.round_dp(2),
        overpaid_amount: overpaid_amount.round_dp(2),
        monthly_salary: input.monthly_salary,
        salary_paid_this_month: input.salary_paid_this_month,
    }
}
