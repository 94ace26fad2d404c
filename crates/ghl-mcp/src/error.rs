//! Error types for the MCP server

use thiserror::Error;

use crate::backend::BackendError;
use crate::protocol::error_codes;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during MCP server operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the tool catalog
    #[error(transparent)]
    Catalog(#[from] ghl_catalog::Error),

    /// Error from the HighLevel API client
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or missing configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Request parameters did not match the method's schema
    #[error("invalid params: {0}")]
    InvalidParams(String),
}

impl Error {
    /// JSON-RPC error code used when this error ends a request
    pub fn error_code(&self) -> i32 {
        match self {
            Error::Catalog(e) if e.is_caller_error() => error_codes::INVALID_PARAMS,
            Error::InvalidParams(_) => error_codes::INVALID_PARAMS,
            _ => error_codes::INTERNAL_ERROR,
        }
    }
}
