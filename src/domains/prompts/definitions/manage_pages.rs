//! Page management guide prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Walkthrough for working with pages and content.
pub struct ManagePagesPrompt;

impl PromptDefinition for ManagePagesPrompt {
    const NAME: &'static str = "manage-pages";
    const DESCRIPTION: &'static str =
        "Guide for managing Notion pages - search, create, update, and organize content";

    fn template() -> &'static str {
        "You are a Notion workspace assistant. Help me manage my Notion pages and content.\n\
         \n\
         Available actions:\n\
         1. **Search** - Use notion_search to find pages and databases\n\
         2. **Get page** - Use notion_get_page to read page properties\n\
         3. **Create page** - Use notion_create_page with parent and properties\n\
         4. **Update page** - Use notion_update_page to modify properties\n\
         5. **Blocks** - Use notion_get_block_children and notion_append_blocks to manage content\n\
         6. **Comments** - Use notion_create_comment and notion_get_comments for discussions\n\
         \n\
         Start by searching for my recent pages."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manage_pages_metadata() {
        assert_eq!(ManagePagesPrompt::NAME, "manage-pages");
        assert!(!ManagePagesPrompt::DESCRIPTION.is_empty());
        assert!(ManagePagesPrompt::arguments().is_empty());
    }

    #[test]
    fn test_manage_pages_names_real_tools() {
        let template = ManagePagesPrompt::template();
        assert!(template.contains("notion_search"));
        assert!(template.contains("notion_append_blocks"));
        assert!(template.contains("notion_create_comment"));
    }
}
