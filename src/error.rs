//! Error types for the Payroll Accrual Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculators themselves are total functions and never fail; these
//! errors are produced by the validation layer that sits in front of them,
//! rejecting inputs outside the engine's documented domain.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Payroll Accrual Engine.
///
/// All validating operations in the engine return this error type, making
/// it easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::AsOfBeforeStart {
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     as_of_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "As-of date 2025-01-15 precedes start date 2025-03-01"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The as-of date falls before the employee's start date.
    #[error("As-of date {as_of_date} precedes start date {start_date}")]
    AsOfBeforeStart {
        /// The employee's start date.
        start_date: NaiveDate,
        /// The as-of date the caller supplied.
        as_of_date: NaiveDate,
    },

    /// A monetary or numeric field that must be non-negative was negative.
    #[error("Field '{field}' must not be negative, got {value}")]
    NegativeAmount {
        /// The field that was negative.
        field: String,
        /// The value the caller supplied.
        value: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
