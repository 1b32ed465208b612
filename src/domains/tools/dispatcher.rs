//! Name-based tool dispatch.
//!
//! A single match over the catalog: parse the raw arguments into the
//! tool's typed parameters, run it against the given client, and return
//! the raw JSON payload. Argument validation failures surface before
//! any network call is made.

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::definitions::{
    AppendBlocksTool, CreateCommentTool, CreateDataSourceTool, CreateDatabaseTool, CreatePageTool,
    DeleteBlockTool, GetBlockChildrenTool, GetBlockTool, GetBotUserTool, GetCommentTool,
    GetCommentsTool, GetDataSourceTool, GetDatabaseTool, GetPagePropertyTool, GetPageTool,
    GetUserTool, ListDataSourceTemplatesTool, ListUsersTool, MovePageTool, QueryDataSourceTool,
    QueryDatabaseTool, SearchTool, UpdateBlockTool, UpdateDataSourceTool, UpdatePageTool,
};
use super::error::ToolError;
use crate::domains::notion::NotionClient;

fn parse<P: DeserializeOwned>(args: JsonObject) -> Result<P, ToolError> {
    serde_json::from_value(Value::Object(args))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Execute the named tool with the given arguments.
pub async fn dispatch(
    name: &str,
    args: JsonObject,
    client: &NotionClient,
) -> Result<Value, ToolError> {
    match name {
        SearchTool::NAME => Ok(SearchTool::execute(client, parse(args)?).await?),

        CreatePageTool::NAME => Ok(CreatePageTool::execute(client, parse(args)?).await?),
        GetPageTool::NAME => Ok(GetPageTool::execute(client, parse(args)?).await?),
        UpdatePageTool::NAME => Ok(UpdatePageTool::execute(client, parse(args)?).await?),
        MovePageTool::NAME => Ok(MovePageTool::execute(client, parse(args)?).await?),
        GetPagePropertyTool::NAME => Ok(GetPagePropertyTool::execute(client, parse(args)?).await?),

        GetBlockTool::NAME => Ok(GetBlockTool::execute(client, parse(args)?).await?),
        GetBlockChildrenTool::NAME => {
            Ok(GetBlockChildrenTool::execute(client, parse(args)?).await?)
        }
        AppendBlocksTool::NAME => Ok(AppendBlocksTool::execute(client, parse(args)?).await?),
        UpdateBlockTool::NAME => Ok(UpdateBlockTool::execute(client, parse(args)?).await?),
        DeleteBlockTool::NAME => Ok(DeleteBlockTool::execute(client, parse(args)?).await?),

        CreateDataSourceTool::NAME => {
            Ok(CreateDataSourceTool::execute(client, parse(args)?).await?)
        }
        GetDataSourceTool::NAME => Ok(GetDataSourceTool::execute(client, parse(args)?).await?),
        UpdateDataSourceTool::NAME => {
            Ok(UpdateDataSourceTool::execute(client, parse(args)?).await?)
        }
        QueryDataSourceTool::NAME => Ok(QueryDataSourceTool::execute(client, parse(args)?).await?),
        ListDataSourceTemplatesTool::NAME => {
            Ok(ListDataSourceTemplatesTool::execute(client, parse(args)?).await?)
        }

        GetDatabaseTool::NAME => Ok(GetDatabaseTool::execute(client, parse(args)?).await?),
        QueryDatabaseTool::NAME => Ok(QueryDatabaseTool::execute(client, parse(args)?).await?),
        CreateDatabaseTool::NAME => Ok(CreateDatabaseTool::execute(client, parse(args)?).await?),

        CreateCommentTool::NAME => Ok(CreateCommentTool::execute(client, parse(args)?).await?),
        GetCommentsTool::NAME => Ok(GetCommentsTool::execute(client, parse(args)?).await?),
        GetCommentTool::NAME => Ok(GetCommentTool::execute(client, parse(args)?).await?),

        ListUsersTool::NAME => Ok(ListUsersTool::execute(client, parse(args)?).await?),
        GetUserTool::NAME => Ok(GetUserTool::execute(client, parse(args)?).await?),
        GetBotUserTool::NAME => Ok(GetBotUserTool::execute(client, parse(args)?).await?),

        _ => Err(ToolError::not_found(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::GET;
    use httpmock::MockServer;
    use serde_json::json;

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let client = NotionClient::new("token");
        let err = dispatch("notion_nonexistent", JsonObject::new(), &client)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
        assert_eq!(err.to_string(), "Unknown tool: notion_nonexistent");
    }

    #[tokio::test]
    async fn test_dispatch_rejects_invalid_arguments_before_any_request() {
        let client = NotionClient::with_base_url("token", "http://127.0.0.1:1");
        let err = dispatch("notion_get_page", JsonObject::new(), &client)
            .await
            .unwrap_err();
        match err {
            ToolError::InvalidArguments(msg) => assert!(msg.contains("page_id")),
            other => panic!("expected InvalidArguments, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_dispatch_runs_tool_against_client() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/users/me");
            then.status(200)
                .json_body(json!({ "object": "user", "id": "bot-1" }));
        });

        let client = NotionClient::with_base_url("token", server.base_url());
        let value = dispatch("notion_get_bot_user", JsonObject::new(), &client)
            .await
            .unwrap();

        mock.assert();
        assert_eq!(value["id"], "bot-1");
    }

    #[tokio::test]
    async fn test_dispatch_surfaces_api_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pages/p1");
            then.status(403).body("forbidden");
        });

        let client = NotionClient::with_base_url("token", server.base_url());
        let err = dispatch("notion_get_page", args(json!({ "page_id": "p1" })), &client)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Notion(_)));
        assert!(err.to_string().contains("403"));
    }
}
