//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and the rendering
//! logic for instantiating templates with arguments.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    /// Uses a simple {{variable}} syntax for substitution.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Render the template with the given arguments.
    ///
    /// `{{variable}}` placeholders are replaced with the corresponding
    /// argument value; placeholders for absent optional arguments are
    /// removed.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut result = self.template.clone();

        for (key, value) in arguments {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        Ok(Self::clean_unmatched_placeholders(&result))
    }

    /// Remove any unmatched placeholder variables.
    fn clean_unmatched_placeholders(template: &str) -> String {
        let mut result = template.to_string();
        while let Some(start) = result.find("{{") {
            match result[start..].find("}}") {
                Some(end) => {
                    result = format!("{}{}", &result[..start], &result[start + end + 2..]);
                }
                None => break,
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let template = PromptTemplate::new("test", None, vec![], "Hello, {{name}}!");

        let mut args = HashMap::new();
        args.insert("name".to_string(), "World".to_string());

        let result = template.render(&args).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_unmatched_placeholder_removed() {
        let template = PromptTemplate::new("test", None, vec![], "Hello{{name}}!");

        let result = template.render(&HashMap::new()).unwrap();
        assert_eq!(result, "Hello!");
    }

    #[test]
    fn test_template_without_placeholders_is_untouched() {
        let body = "Start by searching for my recent pages.";
        let template = PromptTemplate::new("test", None, vec![], body);

        let result = template.render(&HashMap::new()).unwrap();
        assert_eq!(result, body);
    }
}
