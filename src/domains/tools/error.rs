//! Tool-specific error types.

use thiserror::Error;

use crate::domains::notion::NotionError;

/// Errors that can occur during tool dispatch and execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the catalog.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// The arguments did not match the tool's parameter schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The underlying Notion API call failed.
    #[error(transparent)]
    Notion(#[from] NotionError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ToolError::not_found("notion_nonexistent");
        assert_eq!(err.to_string(), "Unknown tool: notion_nonexistent");
    }

    #[test]
    fn test_notion_error_passes_through() {
        let err = ToolError::from(NotionError::api(401, "unauthorized".to_string()));
        assert!(err.to_string().contains("401"));
    }
}
