//! Straight-line fixed-asset depreciation.

use rust_decimal::Decimal;

use crate::models::{BookValueResult, DepreciationInput};

/// Computes an asset's straight-line book value.
///
/// `book_value = initial_value × (1 − rate × years)`, floored at zero:
/// once an asset has depreciated past 100% its book value stays at zero
/// rather than going negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_book_value;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = calculate_book_value(
///     Decimal::new(12000, 0),
///     Decimal::from_str("0.2").unwrap(),
///     Decimal::new(3, 0),
/// );
/// assert_eq!(value, Decimal::new(4800, 0));
/// ```
pub fn calculate_book_value(
    initial_value: Decimal,
    depreciation_rate: Decimal,
    years_in_use: Decimal,
) -> Decimal {
    (initial_value * (Decimal::ONE - depreciation_rate * years_in_use)).max(Decimal::ZERO)
}

/// Computes the book value for a [`DepreciationInput`], echoing the inputs
/// in the result record.
pub fn calculate_depreciation(input: &DepreciationInput) -> BookValueResult {
    BookValueResult {
        initial_value: input.initial_value,
        depreciation_rate: input.depreciation_rate,
        years_in_use: input.years_in_use,
        book_value: calculate_book_value(
            input.initial_value,
            input.depreciation_rate,
            input.years_in_use,
        ),
    }
}
