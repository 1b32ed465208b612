//! Notion API resource shapes and request bodies.
//!
//! Resource structs are deliberately loose: the server relays Notion
//! payloads rather than owning them, so every response type keeps
//! unknown fields via `#[serde(flatten)]` and only names the fields
//! needed to build requests or reason about pagination.
//!
//! Request bodies mark every optional field with
//! `skip_serializing_if = "Option::is_none"` — the Notion API treats an
//! explicit `null` differently from an absent key.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Rich text
// ---------------------------------------------------------------------------

/// A single rich text run (plain text, mention, or equation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichText {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Annotations, mentions, equations and any future run payloads.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `text` payload of a plain rich text run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Value>,
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// A Notion page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub object: String,
    pub id: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A Notion block. Content lives under a type-specific key, so almost
/// everything ends up in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub object: String,
    pub id: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_children: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A data source: an individual table under a database container
/// (API revision 2025-09-03).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSource {
    pub object: String,
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<RichText>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A legacy single-table database container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    pub object: String,
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<RichText>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A comment on a page or inside a discussion thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub object: String,
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rich_text: Option<Vec<RichText>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A workspace user (person or bot).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub object: String,
    pub id: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A cursor-paginated list of resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedList<T> {
    pub object: String,
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Opaque cursor pagination, flattened into request bodies or encoded
/// as a query string depending on the endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Pagination {
    #[schemars(description = "Pagination cursor from previous response")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,

    #[schemars(description = "Results per page (max 100)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl Pagination {
    pub fn is_empty(&self) -> bool {
        self.start_cursor.is_none() && self.page_size.is_none()
    }
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body of `POST /search`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchFilter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,

    #[serde(flatten)]
    pub page: Pagination,
}

/// Restricts search results to one object type.
#[derive(Debug, Clone, Serialize)]
pub struct SearchFilter {
    pub property: String,
    pub value: String,
}

impl SearchFilter {
    /// Filter on the `object` property (`"page"` or `"database"`).
    pub fn object(value: impl Into<String>) -> Self {
        Self {
            property: "object".to_string(),
            value: value.into(),
        }
    }
}

/// Sort order for search results.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSort {
    pub timestamp: String,
    pub direction: String,
}

impl SearchSort {
    /// Sort on `last_edited_time`, the only timestamp search supports.
    pub fn last_edited(direction: impl Into<String>) -> Self {
        Self {
            timestamp: "last_edited_time".to_string(),
            direction: direction.into(),
        }
    }
}

/// Body of `POST /pages`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePageRequest {
    pub parent: Value,
    pub properties: Map<String, Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Value>,
}

/// Body of `PATCH /pages/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_trash: Option<bool>,
}

/// Body of `POST /data_sources/{id}/query` and
/// `POST /databases/{id}/query`. Also flattened into the query tools'
/// advertised parameter schemas, so it derives `JsonSchema`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct QueryRequest {
    #[schemars(
        description = "Filter: { \"property\": \"Status\", \"select\": { \"equals\": \"Done\" } }"
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,

    #[schemars(description = "Sorts: [{ \"property\": \"Created\", \"direction\": \"descending\" }]")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorts: Option<Vec<Value>>,

    #[serde(flatten)]
    pub page: Pagination,
}

/// Body of `POST /data_sources` (with a database parent reference) and
/// `PATCH /data_sources/{id}` (title/schema only).
#[derive(Debug, Clone, Default, Serialize)]
pub struct DataSourcePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
}

/// Body of `POST /databases` (legacy).
#[derive(Debug, Clone, Serialize)]
pub struct CreateDatabaseRequest {
    pub parent: Value,
    pub title: Vec<Value>,
    pub properties: Map<String, Value>,
}

/// Body of `POST /comments`. `parent` and `discussion_id` are a union:
/// exactly one should be present, which the remote API enforces.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCommentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<CommentParent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion_id: Option<String>,

    pub rich_text: Vec<Value>,
}

/// Page parent reference for a new top-level comment.
#[derive(Debug, Clone, Serialize)]
pub struct CommentParent {
    pub page_id: String,
}
