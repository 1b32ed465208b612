//! Tools domain module.
//!
//! This module exposes the Notion API as MCP tools. Tools are
//! executable functions that can be called by MCP clients to read and
//! write workspace content.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per API surface)
//! - `dispatcher.rs` - Name-based dispatch into typed tool execution
//! - `invoke.rs` - Credential resolution and result envelopes
//! - `clients.rs` - Credential-keyed Notion client cache
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool catalog and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Define params, execute(), and to_tool() in a `definitions/` file
//! 2. Export in `definitions/mod.rs`
//! 3. Add a match arm in `dispatcher.rs`
//! 4. Register in `registry.rs`
//!
//! The router is built from the registry catalog, so no other wiring
//! is needed.

mod clients;
pub mod definitions;
mod dispatcher;
mod error;
mod invoke;
mod registry;
pub mod router;

pub use dispatcher::dispatch;
pub use error::ToolError;
pub use invoke::ToolContext;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
