//! Core data models for the Payroll Accrual Engine.
//!
//! This module contains all the domain models used throughout the engine.
//! Every type here is a value type: constructed, computed over, and
//! discarded within a single call. There is no identity, no mutation, and
//! no persistence.

mod accrual;
mod asset;
mod compensation;
mod employee;

pub use accrual::{DayAccrualResult, MonthAccrualResult};
pub use asset::{BookValueResult, DepreciationInput};
pub use compensation::CompensationInput;
pub use employee::{Employee, EmployeeCategory};
