//! Shared helpers for tool definitions: metadata construction, result
//! envelopes, and usage-hint presets matching the catalog conventions.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, Tool, ToolAnnotations};
use serde_json::Value;
use tracing::warn;

/// Build a Tool model from a definition's metadata.
pub(crate) fn tool_model(
    name: &'static str,
    description: &'static str,
    input_schema: Arc<JsonObject>,
    annotations: ToolAnnotations,
) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema,
        annotations: Some(annotations),
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Hints for read-only lookups against the live workspace.
pub(crate) fn read_only_hints(title: &str) -> ToolAnnotations {
    ToolAnnotations {
        title: Some(title.to_string()),
        read_only_hint: Some(true),
        destructive_hint: Some(false),
        open_world_hint: Some(true),
        ..Default::default()
    }
}

/// Hints for non-destructive writes (creates and appends).
pub(crate) fn write_hints(title: &str) -> ToolAnnotations {
    ToolAnnotations {
        title: Some(title.to_string()),
        read_only_hint: Some(false),
        destructive_hint: Some(false),
        open_world_hint: Some(false),
        ..Default::default()
    }
}

/// Hints for writes that are safe to repeat (updates and moves).
pub(crate) fn idempotent_write_hints(title: &str) -> ToolAnnotations {
    ToolAnnotations {
        idempotent_hint: Some(true),
        ..write_hints(title)
    }
}

/// Hints for destructive operations (deletes).
pub(crate) fn destructive_hints(title: &str) -> ToolAnnotations {
    ToolAnnotations {
        destructive_hint: Some(true),
        ..write_hints(title)
    }
}

/// Wrap a successful payload as pretty-printed JSON text content.
pub fn success_result(value: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

/// Wrap a failure message as error-flagged text content.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_result_pretty_prints_payload() {
        let result = success_result(&json!({ "object": "page", "id": "p1" }));
        assert_ne!(result.is_error, Some(true));
        if let rmcp::model::RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("\"id\": \"p1\""));
        } else {
            panic!("expected text content");
        }
    }

    #[test]
    fn test_error_result_sets_error_flag() {
        let result = error_result("Error: something broke");
        assert_eq!(result.is_error, Some(true));
        if let rmcp::model::RawContent::Text(text) = &result.content[0].raw {
            assert_eq!(text.text, "Error: something broke");
        } else {
            panic!("expected text content");
        }
    }

    #[test]
    fn test_hint_presets() {
        let read = read_only_hints("Get Page");
        assert_eq!(read.read_only_hint, Some(true));
        assert_eq!(read.open_world_hint, Some(true));

        let update = idempotent_write_hints("Update Page");
        assert_eq!(update.read_only_hint, Some(false));
        assert_eq!(update.idempotent_hint, Some(true));

        let delete = destructive_hints("Delete Block");
        assert_eq!(delete.destructive_hint, Some(true));
    }
}
