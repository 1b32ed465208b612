//! Tool invocation: credential resolution and result envelopes.
//!
//! [`ToolContext`] is the shared state behind every tool call,
//! whichever transport it arrives on. It resolves the API key (server
//! configuration first, then a `NOTION_API_KEY` argument supplied by
//! the caller), borrows a client from the cache, and wraps the outcome
//! as an MCP tool result. Failures never escape as protocol errors;
//! they become error-flagged text content the model can read.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject};
use tracing::debug;

use super::clients::ClientCache;
use super::definitions::{error_result, success_result};
use super::dispatcher::dispatch;
use crate::core::config::Config;
use crate::domains::notion::NotionError;

/// Argument key callers may use to supply a credential per call.
const API_KEY_ARG: &str = "NOTION_API_KEY";

/// Shared state for tool invocation across transports.
#[derive(Debug)]
pub struct ToolContext {
    config: Arc<Config>,
    clients: ClientCache,
}

impl ToolContext {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            clients: ClientCache::new(),
        }
    }

    /// Server configuration wins over the per-call argument.
    fn resolve_api_key(&self, args: &JsonObject) -> Option<String> {
        self.config.credentials.notion_api_key.clone().or_else(|| {
            args.get(API_KEY_ARG)
                .and_then(|v| v.as_str())
                .map(str::to_string)
        })
    }

    /// Run a tool call end to end and package the result.
    pub async fn invoke(&self, name: &str, mut args: JsonObject) -> CallToolResult {
        let Some(api_key) = self.resolve_api_key(&args) else {
            return error_result(&format!("Error: {}", NotionError::MissingCredential));
        };
        args.remove(API_KEY_ARG);

        debug!(tool = name, "invoking tool");
        let client = self.clients.get_or_create(&api_key);
        match dispatch(name, args, &client).await {
            Ok(value) => success_result(&value),
            Err(err) => error_result(&format!("Error: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn context_without_key() -> ToolContext {
        ToolContext::new(Arc::new(Config::default()))
    }

    fn context_with_key(key: &str) -> ToolContext {
        let mut config = Config::default();
        config.credentials.notion_api_key = Some(key.to_string());
        ToolContext::new(Arc::new(config))
    }

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("expected text content"),
        }
    }

    #[tokio::test]
    async fn test_missing_credential_yields_error_envelope() {
        let context = context_without_key();
        let result = context
            .invoke("notion_get_bot_user", JsonObject::new())
            .await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), "Error: NOTION_API_KEY is required");
    }

    #[tokio::test]
    async fn test_unknown_tool_yields_error_envelope_not_protocol_error() {
        let context = context_with_key("token");
        let result = context.invoke("notion_nonexistent", JsonObject::new()).await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), "Error: Unknown tool: notion_nonexistent");
    }

    #[tokio::test]
    async fn test_argument_credential_used_when_config_has_none() {
        let context = context_without_key();
        let args = json!({ "NOTION_API_KEY": "arg-token" })
            .as_object()
            .cloned()
            .unwrap();
        // Unknown tool keeps the test offline; getting past credential
        // resolution is the point.
        let result = context.invoke("notion_nonexistent", args).await;
        assert_eq!(result_text(&result), "Error: Unknown tool: notion_nonexistent");
    }

    #[tokio::test]
    async fn test_invalid_arguments_yield_error_envelope() {
        let context = context_with_key("token");
        let result = context.invoke("notion_get_page", JsonObject::new()).await;
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).starts_with("Error: Invalid arguments:"));
    }
}
