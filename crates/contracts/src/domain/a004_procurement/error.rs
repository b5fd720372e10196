use thiserror::Error;

/// Procurement book errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProcurementError {
    #[error("No vendor is finalized for material '{0}'")]
    NotFinalized(String),

    #[error("Delivery quantity must be a positive number, got {0}")]
    InvalidQuantity(f64),

    #[error("Amount must not be negative, got {0}")]
    NegativeAmount(i64),

    #[error("Unknown material '{0}'")]
    UnknownMaterial(String),

    #[error("Vendor {0} not found")]
    UnknownVendor(i64),
}
