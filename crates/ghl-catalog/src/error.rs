//! Error types for the tool catalog

use thiserror::Error;

use crate::registry::ToolHandle;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or driving the catalog
#[derive(Debug, Error)]
pub enum Error {
    /// A category toggle named a category that was never registered
    #[error("Unknown category: \"{0}\". Use ghl_list_categories to see available categories.")]
    UnknownCategory(String),

    /// Two catalog entries share the same category name
    #[error("category '{0}' is registered more than once")]
    DuplicateCategory(String),

    /// A tool name was registered twice
    #[error("Tool {0} is already registered")]
    DuplicateTool(String),

    /// A captured handle did not resolve back to the name it was captured under
    #[error("registered tool '{name}' in category '{category}' could not be resolved in the registry")]
    UnresolvedHandle { category: String, name: String },

    /// A handle does not belong to this registry
    #[error("stale tool handle: {0:?}")]
    StaleHandle(ToolHandle),

    /// No tool is registered under this name
    #[error("Tool {0} not found")]
    ToolNotFound(String),

    /// The tool exists but is currently hidden
    #[error("Tool {0} disabled")]
    ToolDisabled(String),

    /// A capability registrar failed while declaring its tools
    #[error("registrar for category '{category}' failed: {source}")]
    Registrar {
        category: String,
        #[source]
        source: Box<Error>,
    },

    /// Tool arguments did not match the declared schema
    #[error("invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },

    /// JSON serialization/deserialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than a fault
    /// in the server.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownCategory(_)
                | Error::ToolNotFound(_)
                | Error::ToolDisabled(_)
                | Error::InvalidArguments { .. }
        )
    }
}
