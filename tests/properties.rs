//! Property-based tests for the Payroll Accrual Engine.
//!
//! These tests exercise the calculator invariants over randomly generated
//! inputs: purity/idempotence, agreement between the month-level and
//! day-level models, non-negativity of clamped fields, and the
//! safe-division policies.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    calculate_book_value, calculate_day_accrual, calculate_month_accrual, calculate_percentage,
    days_in_month,
};
use payroll_engine::models::CompensationInput;

/// Generates a valid compensation input: a start date, an as-of date on or
/// after it, and non-negative amounts in cents.
fn compensation_input() -> impl Strategy<Value = CompensationInput> {
    (
        2015i32..2030,
        1u32..=12,
        1u32..=28,
        0u64..2000,
        0i64..1_000_000_00,
        0i64..200_000_00,
    )
        .prop_map(|(year, month, day, offset_days, salary_cents, paid_cents)| {
            let start_date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let as_of_date = start_date
                .checked_add_days(Days::new(offset_days))
                .unwrap();
            CompensationInput {
                monthly_salary: Decimal::new(salary_cents, 2),
                start_date,
                as_of_date,
                salary_paid_this_month: Decimal::new(paid_cents, 2),
            }
        })
}

proptest! {
    #[test]
    fn day_accrual_is_idempotent(input in compensation_input()) {
        prop_assert_eq!(calculate_day_accrual(&input), calculate_day_accrual(&input));
    }

    #[test]
    fn month_count_agrees_between_models(input in compensation_input()) {
        let month = calculate_month_accrual(&input);
        let day = calculate_day_accrual(&input);
        prop_assert_eq!(month.total_months, day.total_months);
        prop_assert!(month.total_months >= 1);
    }

    #[test]
    fn clamped_fields_are_never_negative(input in compensation_input()) {
        let day = calculate_day_accrual(&input);
        prop_assert!(day.overpaid_amount >= Decimal::ZERO);
        prop_assert!(day.earned_this_month >= Decimal::ZERO);
        prop_assert!(day.daily_rate >= Decimal::ZERO);
        // u32 counts are structurally non-negative; check their ordering
        prop_assert!(day.total_days_should_be_paid == day.total_days_should_work);
        prop_assert!(day.unpaid_days_from_previous_months <= day.total_days_should_be_paid);
        prop_assert!(day.total_unpaid_days <= day.total_days_should_be_paid);
    }

    #[test]
    fn days_worked_never_exceeds_month_length(input in compensation_input()) {
        let day = calculate_day_accrual(&input);
        prop_assert!(day.days_worked_this_month <= day.days_in_current_month);
        prop_assert!((28..=31).contains(&day.days_in_current_month));
    }

    #[test]
    fn same_month_hire_counts_inclusive_days(
        year in 2015i32..2030,
        month in 1u32..=12,
        start_day in 1u32..=28,
        extra in 0u32..=3,
    ) {
        // Keep the as-of day inside the month: day 29-31 does not exist in
        // every month (February in particular).
        let as_of_day = start_day + extra;
        prop_assume!(as_of_day <= days_in_month(year, month));
        let start_date = NaiveDate::from_ymd_opt(year, month, start_day).unwrap();
        let input = CompensationInput {
            monthly_salary: Decimal::new(300_000, 2),
            start_date,
            as_of_date: NaiveDate::from_ymd_opt(year, month, as_of_day).unwrap(),
            salary_paid_this_month: Decimal::ZERO,
        };

        let result = calculate_day_accrual(&input);
        prop_assert_eq!(result.total_months, 1);
        prop_assert_eq!(result.days_worked_this_month, extra + 1);
    }

    #[test]
    fn month_accrual_owes_salary_times_months(input in compensation_input()) {
        let result = calculate_month_accrual(&input);
        prop_assert_eq!(
            result.total_salary_owed,
            input.monthly_salary * Decimal::from(result.total_months)
        );
        prop_assert_eq!(
            result.remaining_salary,
            result.total_salary_owed - input.salary_paid_this_month
        );
    }

    #[test]
    fn book_value_is_never_negative(
        value_cents in 0i64..100_000_00,
        rate_bp in 0i64..20_000,
        years in 0i64..50,
    ) {
        let book_value = calculate_book_value(
            Decimal::new(value_cents, 2),
            Decimal::new(rate_bp, 4),
            Decimal::new(years, 0),
        );
        prop_assert!(book_value >= Decimal::ZERO);
    }

    #[test]
    fn percentage_of_zero_total_is_zero(part_cents in -100_000i64..100_000) {
        let part = Decimal::new(part_cents, 2);
        prop_assert_eq!(calculate_percentage(part, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn percentage_is_bounded_when_part_within_total(
        part in 0i64..=100_000,
        total in 1i64..=100_000,
    ) {
        prop_assume!(part <= total);
        let result = calculate_percentage(Decimal::new(part, 2), Decimal::new(total, 2));
        prop_assert!(result >= Decimal::ZERO);
        prop_assert!(result <= Decimal::ONE_HUNDRED);
    }
}

#[test]
fn same_month_hire_at_end_of_short_february() {
    // A same-month pair whose as-of day is the last day of a 28-day
    // February; days 29-31 simply do not exist in this month.
    let input = CompensationInput {
        monthly_salary: Decimal::new(280_000, 2),
        start_date: NaiveDate::from_ymd_opt(2015, 2, 27).unwrap(),
        as_of_date: NaiveDate::from_ymd_opt(2015, 2, 28).unwrap(),
        salary_paid_this_month: Decimal::ZERO,
    };

    let result = calculate_day_accrual(&input);
    assert_eq!(result.total_months, 1);
    assert_eq!(result.days_in_current_month, 28);
    assert_eq!(result.days_worked_this_month, 2);
}
