//! Tool Router - builds the rmcp ToolRouter from the registry catalog.
//!
//! Every route funnels into the same [`ToolContext`] invocation path,
//! so STDIO/TCP calls and HTTP calls behave identically. The advertised
//! metadata comes verbatim from the registry.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};
use rmcp::model::Tool;

use super::invoke::ToolContext;
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(context: Arc<ToolContext>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRegistry::get_all_tools()
        .into_iter()
        .fold(ToolRouter::new(), |router, tool| {
            router.with_route(make_route(tool, context.clone()))
        })
}

fn make_route<S>(tool: Tool, context: Arc<ToolContext>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = tool.name.clone();
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let context = context.clone();
        let name = name.clone();
        async move { Ok(context.invoke(name.as_ref(), args).await) }.boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    struct TestServer {}

    fn test_context() -> Arc<ToolContext> {
        Arc::new(ToolContext::new(Arc::new(Config::default())))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_context());
        let tools = router.list_all();
        assert_eq!(tools.len(), 25);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"notion_search"));
        assert!(names.contains(&"notion_get_page"));
        assert!(names.contains(&"notion_append_blocks"));
        assert!(names.contains(&"notion_query_data_source"));
        assert!(names.contains(&"notion_create_comment"));
        assert!(names.contains(&"notion_list_users"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router advertise the same catalog
        let context = test_context();
        let registry = ToolRegistry::new(context.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(context);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_router_preserves_advertised_schemas() {
        let router: ToolRouter<TestServer> = build_tool_router(test_context());
        let catalog = ToolRegistry::get_all_tools();
        for tool in router.list_all() {
            let original = catalog
                .iter()
                .find(|t| t.name == tool.name)
                .expect("tool missing from catalog");
            assert_eq!(tool.input_schema, original.input_schema);
        }
    }
}
