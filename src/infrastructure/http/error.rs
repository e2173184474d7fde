//! HTTP error mapping
//!
//! Validation failures reject the request with 400, missing machines
//! with 404. Store failures are logged and surface as an opaque 500 -
//! retry policy belongs to the caller, not this layer.

use crate::ledger::LedgerError;
use crate::registry::RegistryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// Error response body for the JSON API
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// API-facing error with a fixed status code mapping
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Validation(_) => ApiError::Validation(err.to_string()),
            RegistryError::NotFound(_) => ApiError::NotFound(err.to_string()),
            RegistryError::Database(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Validation(_) => ApiError::Validation(err.to_string()),
            LedgerError::MachineNotFound(_) => ApiError::NotFound(err.to_string()),
            LedgerError::Registry(e) => ApiError::Internal(e.to_string()),
            LedgerError::Database(e) => ApiError::Internal(e.to_string()),
        }
    }
}
