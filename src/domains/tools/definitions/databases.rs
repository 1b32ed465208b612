//! Legacy database tools. Databases are containers; new schemas should
//! go through the data source tools instead.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::common::{read_only_hints, tool_model, write_hints};
use crate::domains::notion::types::{CreateDatabaseRequest, QueryRequest};
use crate::domains::notion::{NotionClient, NotionError};

// ========== notion_get_database ==========

/// Parameters for `notion_get_database`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetDatabaseParams {
    #[schemars(description = "Database ID")]
    pub database_id: String,
}

pub struct GetDatabaseTool;

impl GetDatabaseTool {
    pub const NAME: &'static str = "notion_get_database";
    pub const DESCRIPTION: &'static str = "Retrieve a database container by ID. Lists the data sources it holds; use data source tools for schemas and queries.";

    pub async fn execute(
        client: &NotionClient,
        params: GetDatabaseParams,
    ) -> Result<Value, NotionError> {
        let database = client.get_database(&params.database_id).await?;
        Ok(serde_json::to_value(database)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<GetDatabaseParams>(),
            read_only_hints("Get Database"),
        )
    }
}

// ========== notion_query_database ==========

/// Parameters for `notion_query_database`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QueryDatabaseParams {
    #[schemars(description = "Database ID to query")]
    pub database_id: String,

    #[serde(flatten)]
    pub query: QueryRequest,
}

pub struct QueryDatabaseTool;

impl QueryDatabaseTool {
    pub const NAME: &'static str = "notion_query_database";
    pub const DESCRIPTION: &'static str = "Query pages in a database with optional filters and sorts. Works on single-source databases; prefer notion_query_data_source for multi-source ones.";

    pub async fn execute(
        client: &NotionClient,
        params: QueryDatabaseParams,
    ) -> Result<Value, NotionError> {
        let list = client
            .query_database(&params.database_id, &params.query)
            .await?;
        Ok(serde_json::to_value(list)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<QueryDatabaseParams>(),
            read_only_hints("Query Database"),
        )
    }
}

// ========== notion_create_database ==========

/// Parameters for `notion_create_database`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateDatabaseParams {
    #[schemars(description = "Parent: { \"page_id\": \"...\" } or { \"type\": \"workspace\", \"workspace\": true }")]
    pub parent: Value,

    #[schemars(description = "Title as a rich text array")]
    pub title: Vec<Value>,

    #[schemars(
        description = "Initial property schema: { \"Name\": { \"title\": {} }, \"Tags\": { \"multi_select\": {} } }"
    )]
    pub properties: Map<String, Value>,
}

pub struct CreateDatabaseTool;

impl CreateDatabaseTool {
    pub const NAME: &'static str = "notion_create_database";
    pub const DESCRIPTION: &'static str = "Create a new database under a page, with an initial data source built from the given property schema. Exactly one property must be of type title.";

    pub async fn execute(
        client: &NotionClient,
        params: CreateDatabaseParams,
    ) -> Result<Value, NotionError> {
        let request = CreateDatabaseRequest {
            parent: params.parent,
            title: params.title,
            properties: params.properties,
        };
        let database = client.create_database(&request).await?;
        Ok(serde_json::to_value(database)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<CreateDatabaseParams>(),
            write_hints("Create Database"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_database_accepts_bare_id() {
        let params: QueryDatabaseParams =
            serde_json::from_value(json!({ "database_id": "db1" })).unwrap();
        assert!(params.query.filter.is_none());
        assert!(params.query.page.is_empty());
    }

    #[test]
    fn test_create_database_requires_title_and_properties() {
        let err = serde_json::from_value::<CreateDatabaseParams>(json!({
            "parent": { "page_id": "p1" }
        }))
        .unwrap_err();
        assert!(err.to_string().contains("title"));

        let ok = serde_json::from_value::<CreateDatabaseParams>(json!({
            "parent": { "page_id": "p1" },
            "title": [{ "text": { "content": "Tasks" } }],
            "properties": { "Name": { "title": {} } }
        }));
        assert!(ok.is_ok());
    }

    #[test]
    fn test_database_tool_annotations() {
        assert_eq!(
            GetDatabaseTool::to_tool().annotations.unwrap().read_only_hint,
            Some(true)
        );
        assert_eq!(
            CreateDatabaseTool::to_tool().annotations.unwrap().read_only_hint,
            Some(false)
        );
    }
}
