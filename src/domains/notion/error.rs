//! Notion client error types.

use thiserror::Error;

/// Errors raised while talking to the Notion API.
#[derive(Debug, Error)]
pub enum NotionError {
    /// Non-2xx response. Carries the HTTP status and the raw body text;
    /// never retried.
    #[error("Notion API Error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The request never produced a response (connect, TLS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Pagination parameters could not be encoded as a query string.
    #[error("invalid query string: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// A payload could not be serialized or deserialized.
    #[error("invalid payload: {0}")]
    Json(#[from] serde_json::Error),

    /// No credential was resolvable for this invocation.
    #[error("NOTION_API_KEY is required")]
    MissingCredential,
}

impl NotionError {
    /// Create an API error from a status code and response body.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_contains_status_and_body() {
        let err = NotionError::api(404, "not found");
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_missing_credential_message() {
        assert!(NotionError::MissingCredential.to_string().contains("required"));
    }
}
