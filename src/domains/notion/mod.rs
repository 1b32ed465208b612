//! Notion API domain.
//!
//! - `client.rs` - authenticated REST client, one method per remote operation
//! - `types.rs` - pass-through resource shapes and typed request bodies
//! - `error.rs` - client error taxonomy

pub mod client;
mod error;
pub mod types;

pub use client::NotionClient;
pub use error::NotionError;
