//! Payroll Accrual & Reconciliation Engine
//!
//! This crate computes how much salary a monthly-salaried employee has
//! accrued since their start date, reconciles it against amounts already
//! paid, and carries unpaid obligations forward across month boundaries.
//! It also provides a straight-line depreciation helper for fixed-asset
//! valuation and a safe percentage utility for progress displays.
//!
//! All calculators are pure functions over caller-supplied values: the
//! as-of date is always an explicit parameter, never a clock read, so every
//! computation is deterministic and independently testable.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
