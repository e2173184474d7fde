//! Ledger-specific error types

use crate::registry::RegistryError;
use thiserror::Error;

/// Status ledger operation errors
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Status value outside the closed enumeration
    #[error("invalid status: {0}")]
    Validation(String),

    /// Observations can only reference machines that exist
    #[error("machine {0} not found")]
    MachineNotFound(i32),

    /// Registry lookup failed for a reason other than a missing machine
    #[error(transparent)]
    Registry(RegistryError),

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl From<RegistryError> for LedgerError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(id) => LedgerError::MachineNotFound(id),
            other => LedgerError::Registry(other),
        }
    }
}

/// Result type for ledger operations
pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
