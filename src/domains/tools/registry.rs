//! Tool Registry - central catalog and HTTP dispatch for all tools.
//!
//! This module provides:
//! - The ordered catalog of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::Tool;

use super::invoke::ToolContext;

use super::definitions::{
    AppendBlocksTool, CreateCommentTool, CreateDataSourceTool, CreateDatabaseTool, CreatePageTool,
    DeleteBlockTool, GetBlockChildrenTool, GetBlockTool, GetBotUserTool, GetCommentTool,
    GetCommentsTool, GetDataSourceTool, GetDatabaseTool, GetPagePropertyTool, GetPageTool,
    GetUserTool, ListDataSourceTemplatesTool, ListUsersTool, MovePageTool, QueryDataSourceTool,
    QueryDatabaseTool, SearchTool, UpdateBlockTool, UpdateDataSourceTool, UpdatePageTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages the tool catalog.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    context: Arc<ToolContext>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(context: Arc<ToolContext>) -> Self {
        Self { context }
    }

    /// Get all tool names, in catalog order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            SearchTool::NAME,
            CreatePageTool::NAME,
            GetPageTool::NAME,
            UpdatePageTool::NAME,
            MovePageTool::NAME,
            GetPagePropertyTool::NAME,
            GetBlockTool::NAME,
            GetBlockChildrenTool::NAME,
            AppendBlocksTool::NAME,
            UpdateBlockTool::NAME,
            DeleteBlockTool::NAME,
            CreateDataSourceTool::NAME,
            GetDataSourceTool::NAME,
            UpdateDataSourceTool::NAME,
            QueryDataSourceTool::NAME,
            ListDataSourceTemplatesTool::NAME,
            GetDatabaseTool::NAME,
            QueryDatabaseTool::NAME,
            CreateDatabaseTool::NAME,
            CreateCommentTool::NAME,
            GetCommentsTool::NAME,
            GetCommentTool::NAME,
            ListUsersTool::NAME,
            GetUserTool::NAME,
            GetBotUserTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the advertised catalog.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SearchTool::to_tool(),
            CreatePageTool::to_tool(),
            GetPageTool::to_tool(),
            UpdatePageTool::to_tool(),
            MovePageTool::to_tool(),
            GetPagePropertyTool::to_tool(),
            GetBlockTool::to_tool(),
            GetBlockChildrenTool::to_tool(),
            AppendBlocksTool::to_tool(),
            UpdateBlockTool::to_tool(),
            DeleteBlockTool::to_tool(),
            CreateDataSourceTool::to_tool(),
            GetDataSourceTool::to_tool(),
            UpdateDataSourceTool::to_tool(),
            QueryDataSourceTool::to_tool(),
            ListDataSourceTemplatesTool::to_tool(),
            GetDatabaseTool::to_tool(),
            QueryDatabaseTool::to_tool(),
            CreateDatabaseTool::to_tool(),
            CreateCommentTool::to_tool(),
            GetCommentsTool::to_tool(),
            GetCommentTool::to_tool(),
            ListUsersTool::to_tool(),
            GetUserTool::to_tool(),
            GetBotUserTool::to_tool(),
        ]
    }

    /// Number of tools in the catalog.
    pub fn tool_count(&self) -> usize {
        self.tool_names().len()
    }

    /// Dispatch an HTTP tool call.
    ///
    /// Always returns a result envelope; failures are reported through
    /// the `isError` flag rather than a transport error.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: rmcp::model::JsonObject,
    ) -> serde_json::Value {
        let result = self.context.invoke(name, arguments).await;
        serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(ToolContext::new(Arc::new(Config::default()))))
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = test_registry();
        let names = registry.tool_names();
        assert_eq!(names.len(), 25);
        assert_eq!(names[0], "notion_search");
        assert!(names.contains(&"notion_create_page"));
        assert!(names.contains(&"notion_get_block_children"));
        assert!(names.contains(&"notion_query_data_source"));
        assert!(names.contains(&"notion_create_database"));
        assert!(names.contains(&"notion_get_comments"));
        assert!(names.contains(&"notion_get_bot_user"));
    }

    #[test]
    fn test_catalog_matches_names_in_order() {
        let registry = test_registry();
        let tools = ToolRegistry::get_all_tools();
        let tool_names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(tool_names, registry.tool_names());
    }

    #[test]
    fn test_every_tool_advertises_schema_and_annotations() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
            assert!(
                tool.annotations.is_some(),
                "{} has no annotations",
                tool.name
            );
            assert_eq!(
                tool.input_schema.get("type").and_then(|v| v.as_str()),
                Some("object"),
                "{} schema is not an object",
                tool.name
            );
        }
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown_tool_sets_error_flag() {
        let registry = test_registry();
        let value = registry
            .call_tool("unknown", rmcp::model::JsonObject::new())
            .await;
        assert_eq!(value["isError"], true);
    }
}
