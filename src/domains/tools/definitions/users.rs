//! User tools: workspace members and the integration's bot identity.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::common::{read_only_hints, tool_model};
use crate::domains::notion::types::Pagination;
use crate::domains::notion::{NotionClient, NotionError};

// ========== notion_list_users ==========

/// Parameters for `notion_list_users`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListUsersParams {
    #[serde(flatten)]
    pub page: Pagination,
}

pub struct ListUsersTool;

impl ListUsersTool {
    pub const NAME: &'static str = "notion_list_users";
    pub const DESCRIPTION: &'static str =
        "List all users in the workspace, both people and bots.";

    pub async fn execute(
        client: &NotionClient,
        params: ListUsersParams,
    ) -> Result<Value, NotionError> {
        let list = client.list_users(&params.page).await?;
        Ok(serde_json::to_value(list)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<ListUsersParams>(),
            read_only_hints("List Users"),
        )
    }
}

// ========== notion_get_user ==========

/// Parameters for `notion_get_user`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetUserParams {
    #[schemars(description = "User ID")]
    pub user_id: String,
}

pub struct GetUserTool;

impl GetUserTool {
    pub const NAME: &'static str = "notion_get_user";
    pub const DESCRIPTION: &'static str = "Retrieve a user by ID.";

    pub async fn execute(client: &NotionClient, params: GetUserParams) -> Result<Value, NotionError> {
        let user = client.get_user(&params.user_id).await?;
        Ok(serde_json::to_value(user)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<GetUserParams>(),
            read_only_hints("Get User"),
        )
    }
}

// ========== notion_get_bot_user ==========

/// Parameters for `notion_get_bot_user`. Takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetBotUserParams {}

pub struct GetBotUserTool;

impl GetBotUserTool {
    pub const NAME: &'static str = "notion_get_bot_user";
    pub const DESCRIPTION: &'static str = "Retrieve the bot user for the current integration token. Useful for verifying the connection.";

    pub async fn execute(
        client: &NotionClient,
        _params: GetBotUserParams,
    ) -> Result<Value, NotionError> {
        let user = client.get_bot_user().await?;
        Ok(serde_json::to_value(user)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<GetBotUserParams>(),
            read_only_hints("Get Bot User"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_users_accepts_empty_arguments() {
        let params: ListUsersParams = serde_json::from_value(json!({})).unwrap();
        assert!(params.page.is_empty());
    }

    #[test]
    fn test_get_user_requires_user_id() {
        let err = serde_json::from_value::<GetUserParams>(json!({})).unwrap_err();
        assert!(err.to_string().contains("user_id"));
    }

    #[test]
    fn test_bot_user_takes_no_arguments() {
        assert!(serde_json::from_value::<GetBotUserParams>(json!({})).is_ok());
    }

    #[test]
    fn test_user_tools_are_read_only() {
        for tool in [
            ListUsersTool::to_tool(),
            GetUserTool::to_tool(),
            GetBotUserTool::to_tool(),
        ] {
            assert_eq!(tool.annotations.unwrap().read_only_hint, Some(true));
        }
    }
}
