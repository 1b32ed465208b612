//! Comment tools: create and read discussion threads.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::common::{read_only_hints, tool_model, write_hints};
use crate::domains::notion::types::{CommentParent, CreateCommentRequest, Pagination};
use crate::domains::notion::{NotionClient, NotionError};

// ========== notion_create_comment ==========

/// Parameters for `notion_create_comment`. Either `parent_page_id` or
/// `discussion_id` identifies the target thread; `rich_text` runs are
/// relayed to the API verbatim.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateCommentParams {
    #[schemars(description = "Page ID to comment on (use this OR discussion_id)")]
    pub parent_page_id: Option<String>,

    #[schemars(description = "Discussion thread ID to reply to")]
    pub discussion_id: Option<String>,

    #[schemars(
        description = "Comment content: [{ \"type\": \"text\", \"text\": { \"content\": \"My comment\" } }]"
    )]
    pub rich_text: Vec<Value>,
}

pub struct CreateCommentTool;

impl CreateCommentTool {
    pub const NAME: &'static str = "notion_create_comment";
    pub const DESCRIPTION: &'static str = "Add a comment to a page (parent_page_id) or reply to an existing discussion thread (discussion_id). Provide exactly one of the two.";

    pub async fn execute(
        client: &NotionClient,
        params: CreateCommentParams,
    ) -> Result<Value, NotionError> {
        let request = CreateCommentRequest {
            parent: params
                .parent_page_id
                .map(|page_id| CommentParent { page_id }),
            discussion_id: params.discussion_id,
            rich_text: params.rich_text,
        };
        let comment = client.create_comment(&request).await?;
        Ok(serde_json::to_value(comment)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<CreateCommentParams>(),
            write_hints("Create Comment"),
        )
    }
}

// ========== notion_get_comments ==========

/// Parameters for `notion_get_comments`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCommentsParams {
    #[schemars(description = "Page or block ID to list comments for")]
    pub block_id: String,

    #[serde(flatten)]
    pub page: Pagination,
}

pub struct GetCommentsTool;

impl GetCommentsTool {
    pub const NAME: &'static str = "notion_get_comments";
    pub const DESCRIPTION: &'static str = "List unresolved comments on a page or block.";

    pub async fn execute(
        client: &NotionClient,
        params: GetCommentsParams,
    ) -> Result<Value, NotionError> {
        let list = client.list_comments(&params.block_id, &params.page).await?;
        Ok(serde_json::to_value(list)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<GetCommentsParams>(),
            read_only_hints("List Comments"),
        )
    }
}

// ========== notion_get_comment ==========

/// Parameters for `notion_get_comment`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCommentParams {
    #[schemars(description = "Comment ID")]
    pub comment_id: String,
}

pub struct GetCommentTool;

impl GetCommentTool {
    pub const NAME: &'static str = "notion_get_comment";
    pub const DESCRIPTION: &'static str = "Retrieve a single comment by ID.";

    pub async fn execute(
        client: &NotionClient,
        params: GetCommentParams,
    ) -> Result<Value, NotionError> {
        let comment = client.get_comment(&params.comment_id).await?;
        Ok(serde_json::to_value(comment)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<GetCommentParams>(),
            read_only_hints("Get Comment"),
        )
    }
}
