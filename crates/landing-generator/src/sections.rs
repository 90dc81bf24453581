//! Section renderers for the home page.
//!
//! Every renderer is a pure function of the [`RenderContext`] it is given;
//! nothing reads global state, so renders can run side by side freely.

use landing_core::{ApplicationRecord, SiteConfig};
use landing_parser::MarkdownRenderer;
use tracing::debug;

use crate::{
    content::{
        Body, CALLS_TO_ACTION, FEATURES, Feature, HERO_TAGLINE, HERO_TITLE, Illustration, SHOWCASE_HEADING, SHOWCASE_INTRO, SHOWCASE_LINK_LABEL, SHOWCASE_PAGE,
    },
    layout::{Element, Node},
};

/// Inputs shared by all section renderers.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub site: &'a SiteConfig,
    pub markdown: &'a MarkdownRenderer,
}

impl<'a> RenderContext<'a> {
    pub fn new(site: &'a SiteConfig, markdown: &'a MarkdownRenderer) -> Self {
        Self { site, markdown }
    }

    /// Render Markdown into a `markdownBlock` wrapper.
    fn markdown_block(&self, source: &str) -> Element {
        Element::new("div")
            .class("markdownBlock")
            .child(Node::html(self.markdown.render(source)))
    }
}

/// A large navigation button.
fn button(href: String, label: &str) -> Element {
    Element::new("a")
        .class("big-button")
        .attr("href", href)
        .attr("target", "_self")
        .text(label)
}

/// A full-width banner.
fn hero(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("div").class("hero").children(children)
}

/// Page-width wrapper around a block of content.
fn container(child: Element) -> Element {
    Element::new("div")
        .class("container")
        .child(Element::new("div").class("wrapper").child(child))
}

/// The "Get Started" / "Learn the Basics" buttons.
pub fn call_to_action(site: &SiteConfig) -> Element {
    Element::new("div").children(
        CALLS_TO_ACTION
            .iter()
            .map(|cta| button(site.url_for(cta.path), cta.label)),
    )
}

/// Title banner at the top of the page.
pub fn header_hero(site: &SiteConfig) -> Element {
    hero([
        Element::new("div").class("text").text(HERO_TITLE),
        Element::new("div").class("minitext").text(HERO_TAGLINE),
        Element::new("div")
            .class("buttons-unit")
            .child(call_to_action(site)),
    ])
}

/// Feature text. Site links are built as elements so the base URL is
/// attribute-escaped rather than spliced into Markdown.
fn feature_body(ctx: &RenderContext<'_>, body: &Body) -> Element {
    match *body {
        Body::Markdown(source) => ctx.markdown_block(source),
        Body::Linked {
            before,
            label,
            path,
            after,
        } => Element::new("div").class("markdownBlock").child(
            Element::new("p")
                .text(before)
                .child(
                    Element::new("a")
                        .attr("href", ctx.site.url_for(path))
                        .text(label),
                )
                .text(after),
        ),
    }
}

fn feature_block(ctx: &RenderContext<'_>, feature: &Feature) -> Element {
    let text = Element::new("div")
        .class("blockContent")
        .child(Element::new("h2").text(feature.heading))
        .child(feature_body(ctx, &feature.body));

    let illustration = match feature.illustration {
        Illustration::Code(sample) => ctx.markdown_block(sample),
        Illustration::Image { src, alt } => Element::new("img").attr("src", src).attr("alt", alt),
    };

    container(
        Element::new("div")
            .class("blockElement")
            .child(text)
            .child(illustration),
    )
}

/// The fixed list of feature blocks.
pub fn features(ctx: &RenderContext<'_>) -> Element {
    Element::new("div").children(FEATURES.iter().map(|f| feature_block(ctx, f)))
}

fn app_icon(app: &ApplicationRecord, base_url: &str) -> Element {
    Element::new("img")
        .attr("src", app.icon_src(base_url))
        .attr("alt", &app.name)
}

/// One clickable icon per app. Empty input yields an empty wrapper.
pub fn app_list(apps: &[&ApplicationRecord], base_url: &str) -> Element {
    Element::new("div").children(apps.iter().map(|app| {
        Element::new("div").class("showcase").child(
            Element::new("a")
                .attr("href", &app.info_link)
                .child(app_icon(app, base_url)),
        )
    }))
}

/// Gallery of pinned apps.
pub fn mini_showcase(site: &SiteConfig) -> Element {
    let pinned = site.pinned_apps();
    debug!(
        pinned = pinned.len(),
        total = site.users.len(),
        "rendering showcase"
    );

    Element::new("div")
        .class("home-showcase-section")
        .child(Element::new("h2").text(SHOWCASE_HEADING))
        .child(
            Element::new("p")
                .text(SHOWCASE_INTRO)
                .child(
                    Element::new("a")
                        .attr("href", site.url_for(SHOWCASE_PAGE))
                        .text(SHOWCASE_LINK_LABEL),
                )
                .text("!"),
        )
        .child(
            Element::new("div")
                .class("logos")
                .child(app_list(&pinned, &site.base_url)),
        )
}

/// The buttons again, in a banner closing the page.
pub fn trailing_call_to_action(site: &SiteConfig) -> Element {
    hero([call_to_action(site)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_site(base_url: &str) -> SiteConfig {
        SiteConfig::new(
            "Test",
            base_url,
            vec![
                ApplicationRecord::new("A", "a.png", "https://a").pinned(),
                ApplicationRecord::new("B", "http://b/b.png", "https://b"),
            ],
        )
    }

    fn showcase_entries(section: &Element) -> Vec<&Element> {
        section.find_all(&|e| e.has_class("showcase"))
    }

    #[test]
    fn test_call_to_action_links() {
        let site = mixed_site("/site/");
        let cta = call_to_action(&site);
        let buttons: Vec<_> = cta.child_elements().collect();

        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].get_attr("href"), Some("/site/docs/getting-started.html"));
        assert_eq!(buttons[0].text_content(), "Get Started");
        assert_eq!(buttons[1].get_attr("href"), Some("/site/docs/tutorial.html"));
        assert_eq!(buttons[1].text_content(), "Learn the Basics");
        assert!(buttons.iter().all(|b| b.get_attr("target") == Some("_self")));
        assert!(buttons.iter().all(|b| b.has_class("big-button")));
    }

    #[test]
    fn test_header_hero() {
        let site = mixed_site("/");
        let header = header_hero(&site);

        assert!(header.has_class("hero"));
        let text = header.text_content();
        assert!(text.starts_with("React Native"));
        assert!(text.contains("Build native mobile apps using JavaScript and React"));
        assert_eq!(header.find_all(&|e| e.has_class("big-button")).len(), 2);
    }

    #[test]
    fn test_showcase_renders_only_pinned() {
        let site = mixed_site("/site/");
        let section = mini_showcase(&site);
        let entries = showcase_entries(&section);

        assert_eq!(entries.len(), 1);
        let link = entries[0].child_elements().next().expect("link");
        assert_eq!(link.get_attr("href"), Some("https://a"));
        let img = link.child_elements().next().expect("icon");
        assert_eq!(img.get_attr("src"), Some("/site/img/showcase/a.png"));
        assert_eq!(img.get_attr("alt"), Some("A"));
    }

    #[test]
    fn test_showcase_keeps_remote_icons() {
        let site = SiteConfig::new(
            "Test",
            "/",
            vec![ApplicationRecord::new("B", "http://b/b.png", "https://b").pinned()],
        );
        let section = mini_showcase(&site);
        let imgs = section.find_all(&|e| e.tag == "img");

        assert_eq!(imgs.len(), 1);
        assert_eq!(imgs[0].get_attr("src"), Some("http://b/b.png"));
    }

    #[test]
    fn test_showcase_empty_when_nothing_pinned() {
        let site = SiteConfig::new(
            "Test",
            "/",
            vec![ApplicationRecord::new("B", "b.png", "https://b")],
        );
        let section = mini_showcase(&site);

        assert!(showcase_entries(&section).is_empty());
        let logos = section.find_all(&|e| e.has_class("logos"));
        assert_eq!(logos.len(), 1);
        let list = logos[0].child_elements().next().expect("app list");
        assert!(list.children.is_empty());
    }

    #[test]
    fn test_showcase_links_to_full_page() {
        let site = mixed_site("/site/");
        let section = mini_showcase(&site);
        let links = section.find_all(&|e| e.get_attr("href") == Some("/site/showcase.html"));

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text_content(), "check out these apps");
    }

    #[test]
    fn test_app_list_preserves_order() {
        let apps = [
            ApplicationRecord::new("One", "1.png", "https://1"),
            ApplicationRecord::new("Two", "2.png", "https://2"),
        ];
        let refs: Vec<_> = apps.iter().collect();
        let list = app_list(&refs, "/");
        let alts: Vec<_> = list
            .find_all(&|e| e.tag == "img")
            .iter()
            .filter_map(|img| img.get_attr("alt"))
            .collect();

        assert_eq!(alts, vec!["One", "Two"]);
    }

    #[test]
    fn test_features_blocks() {
        let site = mixed_site("/site/");
        let markdown = MarkdownRenderer::default();
        let ctx = RenderContext::new(&site, &markdown);
        let section = features(&ctx);

        let blocks = section.find_all(&|e| e.has_class("blockElement"));
        assert_eq!(blocks.len(), 4);

        let headings: Vec<_> = section
            .find_all(&|e| e.tag == "h2")
            .iter()
            .map(|h| h.text_content())
            .collect();
        assert_eq!(headings[1], "A React Native app is a real mobile app");
        assert_eq!(headings[2], "Don't waste time recompiling");

        let html = Node::from(section.clone()).to_html();
        assert!(html.contains(
            r#"href="/site/blog/2016/03/24/introducing-hot-reloading.html""#
        ));
        assert!(html.contains(r#"alt="Hot Reloading Demonstration""#));
        assert!(html.contains("WhyReactNativeIsSoGreat"));
    }

    #[test]
    fn test_feature_link_survives_unusual_base_url() {
        let site = mixed_site("/my docs (beta)/");
        let markdown = MarkdownRenderer::default();
        let ctx = RenderContext::new(&site, &markdown);
        let section = features(&ctx);

        let links = section.find_all(&|e| e.tag == "a");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text_content(), "Hot Reloading");
        assert_eq!(
            links[0].get_attr("href"),
            Some("/my docs (beta)/blog/2016/03/24/introducing-hot-reloading.html")
        );

        let html = Node::from(links[0].clone()).to_html();
        assert_eq!(
            html,
            r#"<a href="/my docs (beta)/blog/2016/03/24/introducing-hot-reloading.html">Hot Reloading</a>"#
        );

        let text = section.text_content();
        assert!(text.contains("With Hot Reloading, you can even run new code"));
    }

    #[test]
    fn test_trailing_call_to_action() {
        let site = mixed_site("/");
        let cta = trailing_call_to_action(&site);

        assert!(cta.has_class("hero"));
        assert_eq!(cta.find_all(&|e| e.has_class("big-button")).len(), 2);
    }
}
