//! Pricing domain errors
//!
//! The pricing pipeline itself never fails; these errors come from the edges
//! around it: loading reference data, looking up plans, and re-verifying a
//! total presented by a client.

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::MoneyError;

/// Errors that can occur around the pricing domain
#[derive(Debug, Error)]
pub enum PricingError {
    /// Plan id is not in the catalog
    #[error("Plan not found: {0}")]
    PlanNotFound(String),

    /// A client-presented total does not match the recomputed one
    #[error("Total mismatch: computed={computed}, presented={presented}")]
    TotalMismatch {
        computed: Decimal,
        presented: Decimal,
    },

    /// Reference data failed validation
    #[error("Invalid reference data: {0}")]
    InvalidReferenceData(String),

    /// Reference data file could not be read
    #[error("Failed to read reference data: {0}")]
    Io(#[from] std::io::Error),

    /// Reference data document could not be parsed
    #[error("Failed to parse reference data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Money conversion error
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl PricingError {
    pub fn invalid_reference(message: impl Into<String>) -> Self {
        PricingError::InvalidReferenceData(message.into())
    }
}
