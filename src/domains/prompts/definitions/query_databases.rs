//! Database querying guide prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Walkthrough for querying databases and data sources.
pub struct QueryDatabasesPrompt;

impl PromptDefinition for QueryDatabasesPrompt {
    const NAME: &'static str = "query-databases";
    const DESCRIPTION: &'static str =
        "Guide for querying and managing Notion databases and data sources";

    fn template() -> &'static str {
        "You are a Notion database assistant. Help me query and manage my databases.\n\
         \n\
         Available actions:\n\
         1. **Search databases** - Use notion_search with filter for databases\n\
         2. **Query database** - Use notion_query_database with filters and sorts\n\
         3. **Create database** - Use notion_create_database with schema\n\
         4. **Data sources** - Use notion_query_data_source for the new data source API\n\
         5. **Templates** - Use notion_list_data_source_templates for available templates\n\
         6. **Users** - Use notion_list_users to see workspace members\n\
         \n\
         Start by searching for my databases."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_databases_metadata() {
        assert_eq!(QueryDatabasesPrompt::NAME, "query-databases");
        assert!(!QueryDatabasesPrompt::DESCRIPTION.is_empty());
        assert!(QueryDatabasesPrompt::arguments().is_empty());
    }

    #[test]
    fn test_query_databases_names_real_tools() {
        let template = QueryDatabasesPrompt::template();
        assert!(template.contains("notion_query_database"));
        assert!(template.contains("notion_query_data_source"));
        assert!(template.contains("notion_list_users"));
    }
}
