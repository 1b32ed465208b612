//! Workspace search tool.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::common::{read_only_hints, tool_model};
use crate::domains::notion::types::{Pagination, SearchFilter, SearchRequest, SearchSort};
use crate::domains::notion::{NotionClient, NotionError};

/// Object type filter for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchObjectKind {
    Page,
    Database,
}

impl SearchObjectKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Database => "database",
        }
    }
}

/// Sort direction over `last_edited_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Parameters for `notion_search`. All fields are optional; an empty
/// invocation lists everything the integration can see.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchParams {
    #[schemars(description = "Search text to match against titles")]
    pub query: Option<String>,

    #[schemars(description = "Limit results to pages or databases only")]
    pub filter_object: Option<SearchObjectKind>,

    #[schemars(description = "Sort by last_edited_time")]
    pub sort_direction: Option<SortDirection>,

    #[serde(flatten)]
    pub page: Pagination,
}

pub struct SearchTool;

impl SearchTool {
    pub const NAME: &'static str = "notion_search";
    pub const DESCRIPTION: &'static str = "Search pages and databases in your Notion workspace by title. Filter by object type and sort by last edited time.";

    /// Reshape the tool-level filter/sort arguments into the API body.
    pub async fn execute(client: &NotionClient, params: SearchParams) -> Result<Value, NotionError> {
        let request = SearchRequest {
            query: params.query,
            filter: params
                .filter_object
                .map(|kind| SearchFilter::object(kind.as_str())),
            sort: params
                .sort_direction
                .map(|direction| SearchSort::last_edited(direction.as_str())),
            page: params.page,
        };
        let list = client.search(&request).await?;
        Ok(serde_json::to_value(list)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<SearchParams>(),
            read_only_hints("Search Notion"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_accept_empty_arguments() {
        let params: SearchParams = serde_json::from_str("{}").unwrap();
        assert!(params.query.is_none());
        assert!(params.filter_object.is_none());
        assert!(params.page.is_empty());
    }

    #[test]
    fn test_search_params_parse_enums_and_cursor() {
        let json = r#"{
            "query": "roadmap",
            "filter_object": "database",
            "sort_direction": "descending",
            "start_cursor": "cur_1",
            "page_size": 20
        }"#;
        let params: SearchParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.filter_object, Some(SearchObjectKind::Database));
        assert_eq!(params.sort_direction, Some(SortDirection::Descending));
        assert_eq!(params.page.start_cursor.as_deref(), Some("cur_1"));
    }

    #[test]
    fn test_search_params_reject_unknown_enum_value() {
        let json = r#"{ "filter_object": "workspace" }"#;
        assert!(serde_json::from_str::<SearchParams>(json).is_err());
    }

    #[test]
    fn test_search_tool_metadata() {
        let tool = SearchTool::to_tool();
        assert_eq!(tool.name.as_ref(), "notion_search");
        let annotations = tool.annotations.unwrap();
        assert_eq!(annotations.read_only_hint, Some(true));
    }
}
