//! Page tools: create, retrieve, update, move, and property lookup.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::common::{idempotent_write_hints, read_only_hints, tool_model, write_hints};
use crate::domains::notion::types::{CreatePageRequest, Pagination, UpdatePageRequest};
use crate::domains::notion::{NotionClient, NotionError};

// ========== notion_create_page ==========

/// Parameters for `notion_create_page`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreatePageParams {
    #[schemars(
        description = "Parent: { \"data_source_id\": \"...\" } for database pages, or { \"page_id\": \"...\" } for sub-pages"
    )]
    pub parent: Value,

    #[schemars(
        description = "Page properties. For title: { \"Name\": { \"title\": [{ \"text\": { \"content\": \"...\" } }] } }"
    )]
    pub properties: Map<String, Value>,

    #[schemars(description = "Initial content blocks (optional)")]
    pub children: Option<Vec<Value>>,

    #[schemars(description = "Page icon: { \"type\": \"emoji\", \"emoji\": \"...\" }")]
    pub icon: Option<Value>,

    #[schemars(
        description = "Cover image: { \"type\": \"external\", \"external\": { \"url\": \"...\" } }"
    )]
    pub cover: Option<Value>,
}

pub struct CreatePageTool;

impl CreatePageTool {
    pub const NAME: &'static str = "notion_create_page";
    pub const DESCRIPTION: &'static str = "Create a new page in Notion. Set parent as a data source (data_source_id) or another page (page_id). Provide properties matching the parent schema. Optionally include initial content blocks.";

    pub async fn execute(
        client: &NotionClient,
        params: CreatePageParams,
    ) -> Result<Value, NotionError> {
        let request = CreatePageRequest {
            parent: params.parent,
            properties: params.properties,
            children: params.children,
            icon: params.icon,
            cover: params.cover,
        };
        let page = client.create_page(&request).await?;
        Ok(serde_json::to_value(page)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<CreatePageParams>(),
            write_hints("Create Page"),
        )
    }
}

// ========== notion_get_page ==========

/// Parameters for `notion_get_page`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPageParams {
    #[schemars(description = "Page ID (UUID, with or without dashes)")]
    pub page_id: String,
}

pub struct GetPageTool;

impl GetPageTool {
    pub const NAME: &'static str = "notion_get_page";
    pub const DESCRIPTION: &'static str = "Retrieve a Notion page by ID. Returns properties, parent, timestamps, and URL. Use notion_get_block_children to read the page content.";

    pub async fn execute(client: &NotionClient, params: GetPageParams) -> Result<Value, NotionError> {
        let page = client.get_page(&params.page_id).await?;
        Ok(serde_json::to_value(page)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<GetPageParams>(),
            read_only_hints("Get Page"),
        )
    }
}

// ========== notion_update_page ==========

/// Parameters for `notion_update_page`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdatePageParams {
    #[schemars(description = "Page ID to update")]
    pub page_id: String,

    #[schemars(description = "Updated properties")]
    pub properties: Option<Map<String, Value>>,

    #[schemars(description = "New page icon")]
    pub icon: Option<Value>,

    #[schemars(description = "New cover image")]
    pub cover: Option<Value>,

    #[schemars(description = "Set true to archive")]
    pub archived: Option<bool>,

    #[schemars(description = "Set true to move to trash")]
    pub in_trash: Option<bool>,
}

pub struct UpdatePageTool;

impl UpdatePageTool {
    pub const NAME: &'static str = "notion_update_page";
    pub const DESCRIPTION: &'static str = "Update a Notion page. Change properties, icon, cover, or archive/trash status. Use block tools to update page content.";

    pub async fn execute(
        client: &NotionClient,
        params: UpdatePageParams,
    ) -> Result<Value, NotionError> {
        let request = UpdatePageRequest {
            properties: params.properties,
            icon: params.icon,
            cover: params.cover,
            archived: params.archived,
            in_trash: params.in_trash,
        };
        let page = client.update_page(&params.page_id, &request).await?;
        Ok(serde_json::to_value(page)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<UpdatePageParams>(),
            idempotent_write_hints("Update Page"),
        )
    }
}

// ========== notion_move_page ==========

/// Parameters for `notion_move_page`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MovePageParams {
    #[schemars(description = "Page ID to move")]
    pub page_id: String,

    #[schemars(
        description = "New parent: { \"page_id\": \"...\" } or { \"data_source_id\": \"...\" }"
    )]
    pub new_parent: Value,
}

pub struct MovePageTool;

impl MovePageTool {
    pub const NAME: &'static str = "notion_move_page";
    pub const DESCRIPTION: &'static str = "Move a page to a new parent page or data source.";

    pub async fn execute(client: &NotionClient, params: MovePageParams) -> Result<Value, NotionError> {
        let page = client.move_page(&params.page_id, &params.new_parent).await?;
        Ok(serde_json::to_value(page)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<MovePageParams>(),
            idempotent_write_hints("Move Page"),
        )
    }
}

// ========== notion_get_page_property ==========

/// Parameters for `notion_get_page_property`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPagePropertyParams {
    #[schemars(description = "Page ID")]
    pub page_id: String,

    #[schemars(description = "Property ID (from page properties response)")]
    pub property_id: String,

    #[serde(flatten)]
    pub page: Pagination,
}

pub struct GetPagePropertyTool;

impl GetPagePropertyTool {
    pub const NAME: &'static str = "notion_get_page_property";
    pub const DESCRIPTION: &'static str = "Retrieve a specific property value from a page. Useful for paginated properties like relations or rollups.";

    pub async fn execute(
        client: &NotionClient,
        params: GetPagePropertyParams,
    ) -> Result<Value, NotionError> {
        client
            .get_page_property(&params.page_id, &params.property_id, &params.page)
            .await
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<GetPagePropertyParams>(),
            read_only_hints("Get Page Property"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_page_requires_parent_and_properties() {
        let err = serde_json::from_value::<CreatePageParams>(json!({ "parent": {} })).unwrap_err();
        assert!(err.to_string().contains("properties"));

        let ok = serde_json::from_value::<CreatePageParams>(json!({
            "parent": { "page_id": "p0" },
            "properties": {}
        }));
        assert!(ok.is_ok());
    }

    #[test]
    fn test_get_page_requires_page_id() {
        let err = serde_json::from_value::<GetPageParams>(json!({})).unwrap_err();
        assert!(err.to_string().contains("page_id"));
    }

    #[test]
    fn test_update_page_optionals_default_to_none() {
        let params: UpdatePageParams =
            serde_json::from_value(json!({ "page_id": "p1" })).unwrap();
        assert!(params.properties.is_none());
        assert!(params.archived.is_none());
    }

    #[test]
    fn test_move_page_requires_new_parent() {
        let err = serde_json::from_value::<MovePageParams>(json!({ "page_id": "p1" })).unwrap_err();
        assert!(err.to_string().contains("new_parent"));
    }

    #[test]
    fn test_page_property_params_flatten_pagination() {
        let params: GetPagePropertyParams = serde_json::from_value(json!({
            "page_id": "p1",
            "property_id": "prop",
            "start_cursor": "cur_1"
        }))
        .unwrap();
        assert_eq!(params.page.start_cursor.as_deref(), Some("cur_1"));
    }

    #[test]
    fn test_page_tool_annotations() {
        assert_eq!(
            GetPageTool::to_tool().annotations.unwrap().read_only_hint,
            Some(true)
        );
        assert_eq!(
            UpdatePageTool::to_tool().annotations.unwrap().idempotent_hint,
            Some(true)
        );
        assert_eq!(
            CreatePageTool::to_tool().annotations.unwrap().read_only_hint,
            Some(false)
        );
    }
}
