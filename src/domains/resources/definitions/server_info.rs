//! Server info resource definition.

use serde_json::{Value, json};

use super::ResourceDefinition;
use crate::core::config::Config;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};
use crate::domains::tools::ToolRegistry;

/// Server information resource (dynamic).
///
/// Reports connection status and the advertised tool catalog, grouped
/// by API surface.
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "notion://server-info";
    const NAME: &'static str = "Notion Server Info";
    const DESCRIPTION: &'static str =
        "Connection status and available tools for this Notion MCP server";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ServerInfo)
    }
}

impl ServerInfoResource {
    /// Build the resource payload from the live configuration.
    pub fn payload(config: &Config) -> Value {
        json!({
            "name": config.server.name,
            "version": config.server.version,
            "connected": config.has_credential(),
            "tools_available": ToolRegistry::get_all_tools().len(),
            "tool_categories": {
                "search": 1,
                "pages": 5,
                "blocks": 5,
                "data_sources": 5,
                "databases": 3,
                "comments": 3,
                "users": 3,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_metadata() {
        assert_eq!(ServerInfoResource::URI, "notion://server-info");
        assert_eq!(ServerInfoResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_payload_reports_disconnected_without_credential() {
        let payload = ServerInfoResource::payload(&Config::default());
        assert_eq!(payload["connected"], false);
        assert_eq!(payload["tools_available"], 25);
    }

    #[test]
    fn test_payload_categories_sum_to_catalog_size() {
        let payload = ServerInfoResource::payload(&Config::default());
        let categories = payload["tool_categories"].as_object().unwrap();
        let total: u64 = categories.values().map(|v| v.as_u64().unwrap()).sum();
        assert_eq!(total, payload["tools_available"].as_u64().unwrap());
    }

    #[test]
    fn test_payload_reports_connected_with_credential() {
        let mut config = Config::default();
        config.credentials.notion_api_key = Some("ntn_token".to_string());
        let payload = ServerInfoResource::payload(&config);
        assert_eq!(payload["connected"], true);
    }
}
