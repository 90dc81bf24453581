//! Home page composition.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    layout::{Element, Node},
    sections::{self, RenderContext},
};

/// Which part of the page a section is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Features,
    Showcase,
    CallToAction,
}

impl SectionKind {
    /// All kinds, in page order.
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Header,
        SectionKind::Features,
        SectionKind::Showcase,
        SectionKind::CallToAction,
    ];

    fn render(self, ctx: &RenderContext<'_>) -> Element {
        match self {
            Self::Header => sections::header_hero(ctx.site),
            Self::Features => sections::features(ctx),
            Self::Showcase => sections::mini_showcase(ctx.site),
            Self::CallToAction => sections::trailing_call_to_action(ctx.site),
        }
    }
}

/// A rendered top-level section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub node: Node,
}

/// The composed home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomePage {
    sections: Vec<Section>,
}

impl HomePage {
    /// Render every section in page order.
    pub fn compose(ctx: &RenderContext<'_>) -> Self {
        let sections = SectionKind::ALL
            .into_iter()
            .map(|kind| {
                debug!(?kind, "rendering section");
                Section {
                    kind,
                    node: kind.render(ctx).into(),
                }
            })
            .collect();

        Self { sections }
    }

    /// Sections in page order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Find a section by kind.
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Number of showcase entries on the page.
    pub fn showcase_count(&self) -> usize {
        self.section(SectionKind::Showcase)
            .and_then(|s| s.node.as_element())
            .map_or(0, |el| el.find_all(&|e| e.has_class("showcase")).len())
    }

    /// The page wrapped in its container element.
    pub fn to_node(&self) -> Node {
        Element::new("div")
            .class("pageContainer")
            .children(self.sections.iter().map(|s| s.node.clone()))
            .into()
    }

    /// Serialize the page body to HTML.
    pub fn to_html(&self) -> String {
        self.to_node().to_html()
    }

    /// Serialize the layout to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use landing_core::{ApplicationRecord, SiteConfig};
    use landing_parser::MarkdownRenderer;

    use super::*;

    fn compose(site: &SiteConfig) -> HomePage {
        let markdown = MarkdownRenderer::default();
        HomePage::compose(&RenderContext::new(site, &markdown))
    }

    #[test]
    fn test_four_sections_in_order() {
        let site = SiteConfig::new(
            "Test",
            "/",
            vec![ApplicationRecord::new("A", "a.png", "https://a").pinned()],
        );
        let page = compose(&site);
        let kinds: Vec<_> = page.sections().iter().map(|s| s.kind).collect();

        assert_eq!(kinds, SectionKind::ALL.to_vec());
        assert_eq!(page.showcase_count(), 1);
    }

    #[test]
    fn test_four_sections_without_pinned_apps() {
        let site = SiteConfig::new("Test", "/", Vec::new());
        let page = compose(&site);

        assert_eq!(page.sections().len(), 4);
        assert_eq!(page.showcase_count(), 0);
        assert!(page.section(SectionKind::Showcase).is_some());
    }

    #[test]
    fn test_page_container() {
        let site = SiteConfig::new("Test", "/", Vec::new());
        let page = compose(&site);
        let html = page.to_html();

        assert!(html.starts_with(r#"<div class="pageContainer"><div class="hero">"#));
        assert!(html.ends_with("</div></div></div>"));
        assert_eq!(html.matches(r#"class="big-button""#).count(), 4);
    }

    #[test]
    fn test_layout_json() {
        let site = SiteConfig::new(
            "Test",
            "/",
            vec![ApplicationRecord::new("A", "a.png", "https://a").pinned()],
        );
        let page = compose(&site);
        let json = page.to_json().expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        let kinds: Vec<_> = value["sections"]
            .as_array()
            .expect("sections array")
            .iter()
            .map(|s| s["kind"].as_str().unwrap_or_default().to_string())
            .collect();
        assert_eq!(kinds, vec!["header", "features", "showcase", "call_to_action"]);

        let back: HomePage = serde_json::from_str(&json).expect("round trip");
        assert_eq!(back, page);
    }
}
