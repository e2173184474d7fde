//! Registry-specific error types

use thiserror::Error;

/// Machine registry operation errors
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Malformed input, rejected before any write
    #[error("invalid machine: {0}")]
    Validation(String),

    /// No machine with the given id
    #[error("machine {0} not found")]
    NotFound(i32),

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Result type for registry operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
