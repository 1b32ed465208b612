//! Data source tools (API revision 2025-09-03): the individual tables
//! that live under database containers.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::common::{idempotent_write_hints, read_only_hints, tool_model, write_hints};
use crate::domains::notion::types::{DataSourcePatch, Pagination, QueryRequest};
use crate::domains::notion::{NotionClient, NotionError};

// ========== notion_create_data_source ==========

/// Parameters for `notion_create_data_source`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateDataSourceParams {
    #[schemars(description = "Parent database ID")]
    pub database_id: String,

    #[schemars(description = "Title as a rich text array")]
    pub title: Option<Vec<Value>>,

    #[schemars(
        description = "Property schema: { \"Name\": { \"title\": {} }, \"Status\": { \"select\": { \"options\": [...] } } }"
    )]
    pub properties: Option<Map<String, Value>>,
}

pub struct CreateDataSourceTool;

impl CreateDataSourceTool {
    pub const NAME: &'static str = "notion_create_data_source";
    pub const DESCRIPTION: &'static str = "Create a new data source under an existing database. Define the property schema for the new table.";

    pub async fn execute(
        client: &NotionClient,
        params: CreateDataSourceParams,
    ) -> Result<Value, NotionError> {
        let patch = DataSourcePatch {
            title: params.title,
            properties: params.properties,
        };
        let source = client.create_data_source(&params.database_id, &patch).await?;
        Ok(serde_json::to_value(source)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<CreateDataSourceParams>(),
            write_hints("Create Data Source"),
        )
    }
}

// ========== notion_get_data_source ==========

/// Parameters for `notion_get_data_source`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetDataSourceParams {
    #[schemars(description = "Data source ID")]
    pub data_source_id: String,
}

pub struct GetDataSourceTool;

impl GetDataSourceTool {
    pub const NAME: &'static str = "notion_get_data_source";
    pub const DESCRIPTION: &'static str = "Retrieve a data source by ID. Returns its property schema, which you need to create or filter pages correctly.";

    pub async fn execute(
        client: &NotionClient,
        params: GetDataSourceParams,
    ) -> Result<Value, NotionError> {
        let source = client.get_data_source(&params.data_source_id).await?;
        Ok(serde_json::to_value(source)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<GetDataSourceParams>(),
            read_only_hints("Get Data Source"),
        )
    }
}

// ========== notion_update_data_source ==========

/// Parameters for `notion_update_data_source`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateDataSourceParams {
    #[schemars(description = "Data source ID to update")]
    pub data_source_id: String,

    #[schemars(description = "New title as a rich text array")]
    pub title: Option<Vec<Value>>,

    #[schemars(
        description = "Schema changes. Set a property to null to remove it, or add new property definitions."
    )]
    pub properties: Option<Map<String, Value>>,
}

pub struct UpdateDataSourceTool;

impl UpdateDataSourceTool {
    pub const NAME: &'static str = "notion_update_data_source";
    pub const DESCRIPTION: &'static str =
        "Update a data source's title or property schema. Add, rename, or remove properties.";

    pub async fn execute(
        client: &NotionClient,
        params: UpdateDataSourceParams,
    ) -> Result<Value, NotionError> {
        let patch = DataSourcePatch {
            title: params.title,
            properties: params.properties,
        };
        let source = client
            .update_data_source(&params.data_source_id, &patch)
            .await?;
        Ok(serde_json::to_value(source)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<UpdateDataSourceParams>(),
            idempotent_write_hints("Update Data Source"),
        )
    }
}

// ========== notion_query_data_source ==========

/// Parameters for `notion_query_data_source`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QueryDataSourceParams {
    #[schemars(description = "Data source ID to query")]
    pub data_source_id: String,

    #[serde(flatten)]
    pub query: QueryRequest,
}

pub struct QueryDataSourceTool;

impl QueryDataSourceTool {
    pub const NAME: &'static str = "notion_query_data_source";
    pub const DESCRIPTION: &'static str = "Query pages in a data source with optional filters and sorts. Filter conditions depend on the property type (select, multi_select, status, date, checkbox, number, rich_text, people, relation).";

    pub async fn execute(
        client: &NotionClient,
        params: QueryDataSourceParams,
    ) -> Result<Value, NotionError> {
        let list = client
            .query_data_source(&params.data_source_id, &params.query)
            .await?;
        Ok(serde_json::to_value(list)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<QueryDataSourceParams>(),
            read_only_hints("Query Data Source"),
        )
    }
}

// ========== notion_list_data_source_templates ==========

/// Parameters for `notion_list_data_source_templates`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListDataSourceTemplatesParams {
    #[schemars(description = "Data source ID")]
    pub data_source_id: String,

    #[serde(flatten)]
    pub page: Pagination,
}

pub struct ListDataSourceTemplatesTool;

impl ListDataSourceTemplatesTool {
    pub const NAME: &'static str = "notion_list_data_source_templates";
    pub const DESCRIPTION: &'static str =
        "List the template pages defined for a data source.";

    pub async fn execute(
        client: &NotionClient,
        params: ListDataSourceTemplatesParams,
    ) -> Result<Value, NotionError> {
        let list = client
            .list_data_source_templates(&params.data_source_id, &params.page)
            .await?;
        Ok(serde_json::to_value(list)?)
    }

    pub fn to_tool() -> Tool {
        tool_model(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<ListDataSourceTemplatesParams>(),
            read_only_hints("List Data Source Templates"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_data_source_requires_database_id() {
        let err = serde_json::from_value::<CreateDataSourceParams>(json!({})).unwrap_err();
        assert!(err.to_string().contains("database_id"));
    }

    #[test]
    fn test_query_params_flatten_filter_and_cursor() {
        let params: QueryDataSourceParams = serde_json::from_value(json!({
            "data_source_id": "ds1",
            "filter": { "property": "Status", "select": { "equals": "Done" } },
            "start_cursor": "cur_7"
        }))
        .unwrap();
        assert!(params.query.filter.is_some());
        assert_eq!(params.query.page.start_cursor.as_deref(), Some("cur_7"));
    }

    #[test]
    fn test_update_params_accept_partial_schema_change() {
        let params: UpdateDataSourceParams = serde_json::from_value(json!({
            "data_source_id": "ds1",
            "properties": { "Old": null }
        }))
        .unwrap();
        assert!(params.title.is_none());
        assert!(params.properties.unwrap().contains_key("Old"));
    }

    #[test]
    fn test_data_source_tool_annotations() {
        assert_eq!(
            QueryDataSourceTool::to_tool().annotations.unwrap().read_only_hint,
            Some(true)
        );
        assert_eq!(
            UpdateDataSourceTool::to_tool().annotations.unwrap().idempotent_hint,
            Some(true)
        );
    }
}
