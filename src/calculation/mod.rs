//! Calculation logic for the Payroll Accrual Engine.
//!
//! This module contains the pure calculation functions: whole-month salary
//! accrual, day-level accrual and reconciliation, straight-line asset
//! depreciation, the safe percentage helper, and the shared calendar
//! arithmetic they are built on. Every function here is synchronous,
//! side-effect free, and total over its documented domain, so calls may be
//! made concurrently without coordination.

mod calendar;
mod day_accrual;
mod depreciation;
mod month_accrual;
mod percentage;

pub use calendar::{days_in_month, is_leap_year, months_spanned};
pub use day_accrual::calculate_day_accrual;
pub use depreciation::{calculate_book_value, calculate_depreciation};
pub use month_accrual::calculate_month_accrual;
pub use percentage::calculate_percentage;
