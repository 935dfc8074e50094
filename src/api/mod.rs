//! HTTP API module for the Payroll Accrual Engine.
//!
//! This module provides the REST endpoints for the accrual, reconciliation,
//! and book-value calculations. It is the thin validating adapter in front
//! of the pure calculators: requests are checked against the engine's
//! documented input domain here, and the calculators themselves stay total.

mod handlers;
mod request;
mod response;

pub use handlers::{EmployeeAccrualReport, create_router};
pub use request::{CompensationRequest, DepreciationRequest, EmployeeAccrualRequest};
pub use response::ApiError;
