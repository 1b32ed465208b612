//! Notion REST API client.
//!
//! A thin typed wrapper over `reqwest`: one method per remote
//! operation, exactly one network call per invocation. There are no
//! retries, no timeouts and no caching here — every call is independent
//! and failures surface as [`NotionError`].

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::error::NotionError;
use super::types::{
    Block, Comment, CreateCommentRequest, CreateDatabaseRequest, CreatePageRequest, DataSource,
    DataSourcePatch, Database, Page, PaginatedList, Pagination, QueryRequest, SearchRequest,
    UpdatePageRequest, User,
};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

/// Protocol version pinned on every outbound request.
const NOTION_VERSION: &str = "2022-06-28";

/// Authenticated Notion API client. Stateless apart from its
/// credential; cheap to clone.
#[derive(Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Custom Debug implementation to redact the bearer token from logs.
impl std::fmt::Debug for NotionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl NotionClient {
    /// Create a client against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (used by tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// The credential this client was built with.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, NotionError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, path, "Notion API request");

        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), path, "Notion API request failed");
            return Err(NotionError::api(status.as_u16(), body));
        }

        Ok(response.json().await?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, NotionError> {
        self.send::<T, Value>(Method::GET, path, None).await
    }

    /// Append cursor pagination (and any extra pairs) as a query string.
    fn query_path(path: &str, pairs: &[(&str, String)]) -> Result<String, NotionError> {
        if pairs.is_empty() {
            return Ok(path.to_string());
        }
        let qs = serde_urlencoded::to_string(pairs)?;
        Ok(format!("{path}?{qs}"))
    }

    fn page_pairs(page: &Pagination) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(cursor) = &page.start_cursor {
            pairs.push(("start_cursor", cursor.clone()));
        }
        if let Some(size) = page.page_size {
            pairs.push(("page_size", size.to_string()));
        }
        pairs
    }

    // ========== Search ==========

    pub async fn search(&self, request: &SearchRequest) -> Result<PaginatedList<Value>, NotionError> {
        self.send(Method::POST, "/search", Some(request)).await
    }

    // ========== Pages ==========

    pub async fn create_page(&self, request: &CreatePageRequest) -> Result<Page, NotionError> {
        self.send(Method::POST, "/pages", Some(request)).await
    }

    pub async fn get_page(&self, page_id: &str) -> Result<Page, NotionError> {
        self.get(&format!("/pages/{page_id}")).await
    }

    pub async fn update_page(
        &self,
        page_id: &str,
        request: &UpdatePageRequest,
    ) -> Result<Page, NotionError> {
        self.send(Method::PATCH, &format!("/pages/{page_id}"), Some(request))
            .await
    }

    pub async fn move_page(&self, page_id: &str, new_parent: &Value) -> Result<Page, NotionError> {
        let body = serde_json::json!({ "parent": new_parent });
        self.send(Method::POST, &format!("/pages/{page_id}/move"), Some(&body))
            .await
    }

    pub async fn get_page_property(
        &self,
        page_id: &str,
        property_id: &str,
        page: &Pagination,
    ) -> Result<Value, NotionError> {
        let path = Self::query_path(
            &format!("/pages/{page_id}/properties/{property_id}"),
            &Self::page_pairs(page),
        )?;
        self.get(&path).await
    }

    // ========== Blocks ==========

    pub async fn get_block(&self, block_id: &str) -> Result<Block, NotionError> {
        self.get(&format!("/blocks/{block_id}")).await
    }

    pub async fn get_block_children(
        &self,
        block_id: &str,
        page: &Pagination,
    ) -> Result<PaginatedList<Block>, NotionError> {
        let path = Self::query_path(
            &format!("/blocks/{block_id}/children"),
            &Self::page_pairs(page),
        )?;
        self.get(&path).await
    }

    pub async fn append_blocks(
        &self,
        block_id: &str,
        children: &[Value],
    ) -> Result<PaginatedList<Block>, NotionError> {
        let body = serde_json::json!({ "children": children });
        self.send(
            Method::PATCH,
            &format!("/blocks/{block_id}/children"),
            Some(&body),
        )
        .await
    }

    pub async fn update_block(
        &self,
        block_id: &str,
        data: &Map<String, Value>,
    ) -> Result<Block, NotionError> {
        self.send(Method::PATCH, &format!("/blocks/{block_id}"), Some(data))
            .await
    }

    pub async fn delete_block(&self, block_id: &str) -> Result<Block, NotionError> {
        self.send::<Block, Value>(Method::DELETE, &format!("/blocks/{block_id}"), None)
            .await
    }

    // ========== Data sources (2025-09-03) ==========

    pub async fn create_data_source(
        &self,
        database_id: &str,
        patch: &DataSourcePatch,
    ) -> Result<DataSource, NotionError> {
        #[derive(Serialize)]
        struct Body<'a> {
            parent: Value,
            #[serde(flatten)]
            patch: &'a DataSourcePatch,
        }

        let body = Body {
            parent: serde_json::json!({ "type": "database", "database_id": database_id }),
            patch,
        };
        self.send(Method::POST, "/data_sources", Some(&body)).await
    }

    pub async fn get_data_source(&self, data_source_id: &str) -> Result<DataSource, NotionError> {
        self.get(&format!("/data_sources/{data_source_id}")).await
    }

    pub async fn update_data_source(
        &self,
        data_source_id: &str,
        patch: &DataSourcePatch,
    ) -> Result<DataSource, NotionError> {
        self.send(
            Method::PATCH,
            &format!("/data_sources/{data_source_id}"),
            Some(patch),
        )
        .await
    }

    pub async fn query_data_source(
        &self,
        data_source_id: &str,
        request: &QueryRequest,
    ) -> Result<PaginatedList<Page>, NotionError> {
        self.send(
            Method::POST,
            &format!("/data_sources/{data_source_id}/query"),
            Some(request),
        )
        .await
    }

    pub async fn list_data_source_templates(
        &self,
        data_source_id: &str,
        page: &Pagination,
    ) -> Result<PaginatedList<Page>, NotionError> {
        let path = Self::query_path(
            &format!("/data_sources/{data_source_id}/templates"),
            &Self::page_pairs(page),
        )?;
        self.get(&path).await
    }

    // ========== Databases (legacy) ==========

    pub async fn get_database(&self, database_id: &str) -> Result<Database, NotionError> {
        self.get(&format!("/databases/{database_id}")).await
    }

    pub async fn query_database(
        &self,
        database_id: &str,
        request: &QueryRequest,
    ) -> Result<PaginatedList<Page>, NotionError> {
        self.send(
            Method::POST,
            &format!("/databases/{database_id}/query"),
            Some(request),
        )
        .await
    }

    pub async fn create_database(
        &self,
        request: &CreateDatabaseRequest,
    ) -> Result<Database, NotionError> {
        self.send(Method::POST, "/databases", Some(request)).await
    }

    // ========== Comments ==========

    pub async fn create_comment(
        &self,
        request: &CreateCommentRequest,
    ) -> Result<Comment, NotionError> {
        self.send(Method::POST, "/comments", Some(request)).await
    }

    pub async fn list_comments(
        &self,
        block_id: &str,
        page: &Pagination,
    ) -> Result<PaginatedList<Comment>, NotionError> {
        let mut pairs = vec![("block_id", block_id.to_string())];
        pairs.extend(Self::page_pairs(page));
        let path = Self::query_path("/comments", &pairs)?;
        self.get(&path).await
    }

    pub async fn get_comment(&self, comment_id: &str) -> Result<Comment, NotionError> {
        self.get(&format!("/comments/{comment_id}")).await
    }

    // ========== Users ==========

    pub async fn list_users(&self, page: &Pagination) -> Result<PaginatedList<User>, NotionError> {
        let path = Self::query_path("/users", &Self::page_pairs(page))?;
        self.get(&path).await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User, NotionError> {
        self.get(&format!("/users/{user_id}")).await
    }

    pub async fn get_bot_user(&self) -> Result<User, NotionError> {
        self.get("/users/me").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::{GET, PATCH, POST};
    use httpmock::MockServer;
    use serde_json::json;

    fn test_client(server: &MockServer) -> NotionClient {
        NotionClient::with_base_url("secret-token", server.base_url())
    }

    fn page_body(id: &str) -> Value {
        json!({ "object": "page", "id": id })
    }

    #[tokio::test]
    async fn test_get_page_sends_auth_and_version_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/pages/p1")
                .header("authorization", "Bearer secret-token")
                .header("notion-version", "2022-06-28");
            then.status(200).json_body(page_body("p1"));
        });

        let page = test_client(&server).get_page("p1").await.unwrap();

        mock.assert();
        assert_eq!(page.id, "p1");
    }

    #[tokio::test]
    async fn test_move_page_posts_parent_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/pages/p1/move")
                .json_body(json!({ "parent": { "page_id": "p2" } }));
            then.status(200).json_body(page_body("p1"));
        });

        let page = test_client(&server)
            .move_page("p1", &json!({ "page_id": "p2" }))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(page.id, "p1");
    }

    #[tokio::test]
    async fn test_non_success_status_yields_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pages/missing");
            then.status(404).body("not found");
        });

        let err = test_client(&server).get_page("missing").await.unwrap_err();

        match &err {
            NotionError::Api { status, body } => {
                assert_eq!(*status, 404);
                assert_eq!(body, "not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("not found"));
    }

    #[tokio::test]
    async fn test_search_without_arguments_sends_empty_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/search").json_body(json!({}));
            then.status(200).json_body(json!({
                "object": "list",
                "results": [],
                "next_cursor": null,
                "has_more": false
            }));
        });

        let list = test_client(&server)
            .search(&SearchRequest::default())
            .await
            .unwrap();

        mock.assert();
        assert!(list.results.is_empty());
        assert!(!list.has_more);
    }

    #[tokio::test]
    async fn test_query_database_forwards_cursor_in_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/databases/db1/query")
                .json_body(json!({ "start_cursor": "cur_42", "page_size": 10 }));
            then.status(200).json_body(json!({
                "object": "list",
                "results": [],
                "next_cursor": null,
                "has_more": false
            }));
        });

        let request = QueryRequest {
            page: Pagination {
                start_cursor: Some("cur_42".to_string()),
                page_size: Some(10),
            },
            ..Default::default()
        };
        test_client(&server)
            .query_database("db1", &request)
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_list_users_forwards_cursor_in_query_string() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/users")
                .query_param("start_cursor", "cur_42")
                .query_param("page_size", "25");
            then.status(200).json_body(json!({
                "object": "list",
                "results": [],
                "next_cursor": null,
                "has_more": false
            }));
        });

        let page = Pagination {
            start_cursor: Some("cur_42".to_string()),
            page_size: Some(25),
        };
        test_client(&server).list_users(&page).await.unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_list_comments_includes_block_id_param() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/comments")
                .query_param("block_id", "b1");
            then.status(200).json_body(json!({
                "object": "list",
                "results": [],
                "next_cursor": null,
                "has_more": false
            }));
        });

        test_client(&server)
            .list_comments("b1", &Pagination::default())
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_create_data_source_builds_database_parent() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/data_sources").json_body(json!({
                "parent": { "type": "database", "database_id": "db1" },
                "title": [{ "type": "text", "text": { "content": "Tasks" } }]
            }));
            then.status(200)
                .json_body(json!({ "object": "data_source", "id": "ds1" }));
        });

        let patch = DataSourcePatch {
            title: Some(vec![json!({ "type": "text", "text": { "content": "Tasks" } })]),
            properties: None,
        };
        let source = test_client(&server)
            .create_data_source("db1", &patch)
            .await
            .unwrap();

        mock.assert();
        assert_eq!(source.id, "ds1");
    }

    #[tokio::test]
    async fn test_append_blocks_patches_children() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PATCH)
                .path("/blocks/b1/children")
                .json_body(json!({ "children": [{ "type": "divider", "divider": {} }] }));
            then.status(200).json_body(json!({
                "object": "list",
                "results": [],
                "next_cursor": null,
                "has_more": false
            }));
        });

        let children = vec![json!({ "type": "divider", "divider": {} })];
        test_client(&server)
            .append_blocks("b1", &children)
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_consecutive_gets_issue_independent_calls() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/pages/p1");
            then.status(200).json_body(page_body("p1"));
        });

        let client = test_client(&server);
        let first = client.get_page("p1").await.unwrap();
        let second = client.get_page("p1").await.unwrap();

        mock.assert_hits(2);
        assert_eq!(first.id, second.id);
    }
}
