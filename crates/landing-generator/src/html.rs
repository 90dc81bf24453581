//! HTML document generation.
//!
//! Wraps the composed home page in the base document template.

use landing_core::SiteConfig;
use landing_parser::html_escape;
use thiserror::Error;
use tracing::debug;

use crate::{
    page::HomePage,
    template::{TemplateContext, TemplateError, TemplateRegistry},
};

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// Document language attribute.
const LANG: &str = "en";

/// Turns a [`HomePage`] into a complete HTML document.
#[derive(Debug, Clone)]
pub struct HtmlGenerator {
    templates: TemplateRegistry,
}

impl Default for HtmlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlGenerator {
    /// Create a generator with the built-in templates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: TemplateRegistry::new(),
        }
    }

    /// Create a generator with custom templates.
    #[must_use]
    pub fn with_templates(templates: TemplateRegistry) -> Self {
        Self { templates }
    }

    /// Render the full document for `page`.
    pub fn generate(&self, site: &SiteConfig, page: &HomePage) -> Result<String> {
        let content = page.to_html();
        debug!(bytes = content.len(), "wrapping home page in base template");

        let mut ctx = TemplateContext::new()
            .with_var("lang", LANG)
            .with_var("title", html_escape(&site.title))
            .with_var("base_url", html_escape(&site.base_url))
            .with_var("content", content);

        if let Some(description) = &site.description {
            ctx.insert("description", html_escape(description));
        }

        Ok(self.templates.render("base", &ctx)?)
    }
}
