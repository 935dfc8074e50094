//! Safe percentage calculation.

use rust_decimal::Decimal;

/// Returns `part / total × 100`, rounded to 2 decimal places.
///
/// Returns zero when `total` is zero instead of raising an error — the
/// same safe-division policy the rest of the engine follows. Used by
/// callers and views for progress displays.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     calculate_percentage(Decimal::new(1, 0), Decimal::new(4, 0)),
///     Decimal::new(25, 0)
/// );
/// assert_eq!(
///     calculate_percentage(Decimal::new(5, 0), Decimal::ZERO),
///     Decimal::ZERO
/// );
/// ```
pub fn calculate_percentage(part: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    (part / total * Decimal::ONE_HUNDRED).round_dp(2)
}
