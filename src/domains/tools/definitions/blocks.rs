//! Block tools: read, append, update, and delete page content.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::common::{
    destructive_hints, idempotent_write_hints, read_only_hints, tool_model, write_hints,
};
use crate::domains::notion::types::Pagination;
use crate::domains::notion::{NotionClient, NotionError};

// ========== notion_get_block ==========

/// Parameters for `notion_get_block`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetBlockParams {
    #[schemars(description = "Block ID (a page ID also works)")]
    pub block_id: String,
}

pub struct GetBlockTool;

impl GetBlockTool {
    pub const NAME: &'static str = "notion_get_block";
    pub const DESCRIPTION: &'static str =
        "Retrieve a single block by ID. Returns block type, content, and whether it has children.";

    pub async fn execute(client: &NotionClient, params: GetBlockParams) -> Result<Value, NotionError> {
        let block = client.get_block(&params.block_id).await?;
        Ok(serde_json::to_value(block)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<GetBlockParams>(),
            read_only_hints("Get Block"),
        )
    }
}

// ========== notion_get_block_children ==========

/// Parameters for `notion_get_block_children`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetBlockChildrenParams {
    #[schemars(description = "Block or page ID")]
    pub block_id: String,

    #[serde(flatten)]
    pub page: Pagination,
}

pub struct GetBlockChildrenTool;

impl GetBlockChildrenTool {
    pub const NAME: &'static str = "notion_get_block_children";
    pub const DESCRIPTION: &'static str = "Get child blocks of a page or block. This is how you read page content. Returns a paginated list of blocks.";

    pub async fn execute(
        client: &NotionClient,
        params: GetBlockChildrenParams,
    ) -> Result<Value, NotionError> {
        let list = client
            .get_block_children(&params.block_id, &params.page)
            .await?;
        Ok(serde_json::to_value(list)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<GetBlockChildrenParams>(),
            read_only_hints("Get Block Children"),
        )
    }
}

// ========== notion_append_blocks ==========

/// Parameters for `notion_append_blocks`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AppendBlocksParams {
    #[schemars(description = "Page or block ID to append to")]
    pub block_id: String,

    #[schemars(
        description = "Block objects. Example: { \"type\": \"paragraph\", \"paragraph\": { \"rich_text\": [{ \"type\": \"text\", \"text\": { \"content\": \"Hello\" } }] } }"
    )]
    pub children: Vec<Value>,
}

pub struct AppendBlocksTool;

impl AppendBlocksTool {
    pub const NAME: &'static str = "notion_append_blocks";
    pub const DESCRIPTION: &'static str = "Append content blocks to a page or block. Max 100 blocks, 2 levels of nesting. Common types: paragraph, heading_1/2/3, bulleted_list_item, numbered_list_item, to_do, code, quote, callout, divider, table.";

    pub async fn execute(
        client: &NotionClient,
        params: AppendBlocksParams,
    ) -> Result<Value, NotionError> {
        let list = client.append_blocks(&params.block_id, &params.children).await?;
        Ok(serde_json::to_value(list)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<AppendBlocksParams>(),
            write_hints("Append Block Children"),
        )
    }
}

// ========== notion_update_block ==========

/// Parameters for `notion_update_block`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateBlockParams {
    #[schemars(description = "Block ID to update")]
    pub block_id: String,

    #[schemars(
        description = "Block type key with content: { \"paragraph\": { \"rich_text\": [...] } }"
    )]
    pub data: Map<String, Value>,
}

pub struct UpdateBlockTool;

impl UpdateBlockTool {
    pub const NAME: &'static str = "notion_update_block";
    pub const DESCRIPTION: &'static str = "Update a block's content. Send the block type key with updated data, e.g. { \"paragraph\": { \"rich_text\": [...] } }.";

    pub async fn execute(
        client: &NotionClient,
        params: UpdateBlockParams,
    ) -> Result<Value, NotionError> {
        let block = client.update_block(&params.block_id, &params.data).await?;
        Ok(serde_json::to_value(block)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<UpdateBlockParams>(),
            idempotent_write_hints("Update Block"),
        )
    }
}

// ========== notion_delete_block ==========

/// Parameters for `notion_delete_block`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteBlockParams {
    #[schemars(description = "Block ID to delete")]
    pub block_id: String,
}

pub struct DeleteBlockTool;

impl DeleteBlockTool {
    pub const NAME: &'static str = "notion_delete_block";
    pub const DESCRIPTION: &'static str = "Delete (archive) a block. The block is moved to trash.";

    pub async fn execute(
        client: &NotionClient,
        params: DeleteBlockParams,
    ) -> Result<Value, NotionError> {
        let block = client.delete_block(&params.block_id).await?;
        Ok(serde_json::to_value(block)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<DeleteBlockParams>(),
            destructive_hints("Delete Block"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_append_blocks_requires_children() {
        let err =
            serde_json::from_value::<AppendBlocksParams>(json!({ "block_id": "b1" })).unwrap_err();
        assert!(err.to_string().contains("children"));
    }

    #[test]
    fn test_update_block_data_is_arbitrary_object() {
        let params: UpdateBlockParams = serde_json::from_value(json!({
            "block_id": "b1",
            "data": { "paragraph": { "rich_text": [] } }
        }))
        .unwrap();
        assert!(params.data.contains_key("paragraph"));
    }

    #[test]
    fn test_block_children_params_flatten_pagination() {
        let params: GetBlockChildrenParams = serde_json::from_value(json!({
            "block_id": "b1",
            "page_size": 10
        }))
        .unwrap();
        assert_eq!(params.page.page_size, Some(10));
    }

    #[test]
    fn test_delete_block_is_destructive() {
        let annotations = DeleteBlockTool::to_tool().annotations.unwrap();
        assert_eq!(annotations.destructive_hint, Some(true));
        assert_eq!(annotations.read_only_hint, Some(false));
    }
}
