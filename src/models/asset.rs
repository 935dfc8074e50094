//! Fixed-asset depreciation models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The inputs to a straight-line book-value calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciationInput {
    /// The asset's purchase value.
    pub initial_value: Decimal,
    /// Depreciation rate as a fraction per year (e.g. `0.2` for 20%).
    pub depreciation_rate: Decimal,
    /// Years the asset has been in use. Fractional years are allowed.
    pub years_in_use: Decimal,
}

impl DepreciationInput {
    /// Checks that all fields are non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NegativeAmount`] naming the offending field.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in [
            ("initial_value", self.initial_value),
            ("depreciation_rate", self.depreciation_rate),
            ("years_in_use", self.years_in_use),
        ] {
            if value.is_sign_negative() {
                return Err(EngineError::NegativeAmount {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// The result of a book-value calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookValueResult {
    /// The asset's purchase value.
    pub initial_value: Decimal,
    /// Depreciation rate as a fraction per year.
    pub depreciation_rate: Decimal,
    /// Years the asset has been in use.
    pub years_in_use: Decimal,
    /// The depreciated value, floored at zero.
    pub book_value: Decimal,
}
