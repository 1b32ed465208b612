//! Tool definitions module.
//!
//! One file per Notion API surface. Each tool owns its parameter
//! schema, description, and usage-hint metadata.

pub mod blocks;
pub mod comments;
pub mod common;
pub mod data_sources;
pub mod databases;
pub mod pages;
pub mod search;
pub mod users;

pub use blocks::{
    AppendBlocksTool, DeleteBlockTool, GetBlockChildrenTool, GetBlockTool, UpdateBlockTool,
};
pub use comments::{CreateCommentTool, GetCommentTool, GetCommentsTool};
pub use common::{error_result, success_result};
pub use data_sources::{
    CreateDataSourceTool, GetDataSourceTool, ListDataSourceTemplatesTool, QueryDataSourceTool,
    UpdateDataSourceTool,
};
pub use databases::{CreateDatabaseTool, GetDatabaseTool, QueryDatabaseTool};
pub use pages::{
    CreatePageTool, GetPagePropertyTool, GetPageTool, MovePageTool, UpdatePageTool,
};
pub use search::SearchTool;
pub use users::{GetBotUserTool, GetUserTool, ListUsersTool};
