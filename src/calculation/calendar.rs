//! Shared calendar arithmetic.
//!
//! Dates throughout the engine are naive calendar dates: no time-of-day and
//! no time zone. Callers pass explicit year/month/day values, which keeps
//! the calculators deterministic regardless of where they run.

use chrono::{Datelike, NaiveDate};

/// Returns true if `year` is a leap year in the Gregorian calendar.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2025));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2000));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of calendar days in the given month (28–31).
///
/// Months outside 1–12 are treated as 31-day months; the engine only ever
/// passes normalized month numbers.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2025, 1), 31);
/// assert_eq!(days_in_month(2025, 2), 28);
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2025, 4), 30);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Counts the calendar months spanned from `start` to `as_of`, inclusive of
/// both endpoint months.
///
/// The hire month counts as one full month regardless of the day-of-month:
/// `months_spanned(2025-01-15, 2025-01-31)` is 1 and
/// `months_spanned(2025-01-15, 2025-02-01)` is 2. The result is signed; it
/// is zero or negative only when `as_of` precedes `start` in month terms,
/// which the validation layer rejects before calculation.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::months_spanned;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// assert_eq!(months_spanned(start, as_of), 3);
/// ```
pub fn months_spanned(start: NaiveDate, as_of: NaiveDate) -> i64 {
    (i64::from(as_of.year()) - i64::from(start.year())) * 12
        + (i64::from(as_of.month()) - i64::from(start.month()))
        + 1
}
