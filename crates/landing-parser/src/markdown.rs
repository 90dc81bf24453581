//! Markdown blocks rendered with pulldown-cmark.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};

use crate::syntax::{SyntaxError, SyntaxHighlighter};

/// Renders Markdown snippets to HTML, highlighting fenced code.
#[derive(Debug)]
pub struct MarkdownRenderer {
    highlighter: SyntaxHighlighter,
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::with_highlighter(SyntaxHighlighter::default())
    }
}

impl MarkdownRenderer {
    /// Create a renderer that highlights code with the named theme.
    pub fn new(theme: &str) -> Result<Self, SyntaxError> {
        Ok(Self::with_highlighter(SyntaxHighlighter::new(theme)?))
    }

    /// Create a renderer around an existing highlighter.
    pub fn with_highlighter(highlighter: SyntaxHighlighter) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        Self {
            highlighter,
            options,
        }
    }

    /// The highlighter used for code fences.
    pub fn highlighter(&self) -> &SyntaxHighlighter {
        &self.highlighter
    }

    /// Render a Markdown snippet to HTML.
    pub fn render(&self, source: &str) -> String {
        let mut events = Vec::new();
        // (language, accumulated source) while inside a code block
        let mut code: Option<(Option<String>, String)> = None;

        for event in Parser::new_ext(source, self.options) {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => {
                            info.split_whitespace().next().map(str::to_string)
                        }
                        CodeBlockKind::Indented => None,
                    };
                    code = Some((lang, String::new()));
                }
                Event::Text(text) if code.is_some() => {
                    if let Some((_, buf)) = code.as_mut() {
                        buf.push_str(&text);
                    }
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, buf)) = code.take() {
                        let highlighted = self.highlighter.highlight(&buf, lang.as_deref());
                        events.push(Event::Html(highlighted.into()));
                    }
                }
                other => events.push(other),
            }
        }

        let mut out = String::with_capacity(source.len() * 2);
        html::push_html(&mut out, events.into_iter());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_paragraph() {
        let renderer = MarkdownRenderer::default();
        let html = renderer.render("React Native lets you build *mobile* apps.");

        assert_eq!(
            html.trim(),
            "<p>React Native lets you build <em>mobile</em> apps.</p>"
        );
    }

    #[test]
    fn test_render_link() {
        let renderer = MarkdownRenderer::default();
        let html = renderer.render("With [Hot Reloading](https://example.com/hot.html), try it.");

        assert!(html.contains(r#"<a href="https://example.com/hot.html">Hot Reloading</a>"#));
    }

    #[test]
    fn test_code_fence_is_highlighted() {
        let renderer = MarkdownRenderer::default();
        let html = renderer.render("```javascript\nimport React from 'react';\n```\n");

        assert!(html.contains("<pre style="));
        assert!(html.contains("React"));
        assert!(!html.contains("<code class=\"language-javascript\">"));
    }

    #[test]
    fn test_code_fence_unknown_language_falls_back() {
        let renderer = MarkdownRenderer::default();
        let html = renderer.render("```nolang\n<View />\n```\n");

        assert!(html.contains("<code class=\"language-nolang\">&lt;View /&gt;\n</code>"));
    }

    #[test]
    fn test_text_after_code_block_is_not_swallowed() {
        let renderer = MarkdownRenderer::default();
        let html = renderer.render("```\ncode\n```\n\nAfter the block.\n");

        assert!(html.contains("<pre><code>code\n</code></pre>"));
        assert!(html.contains("<p>After the block.</p>"));
    }

    #[test]
    fn test_inline_text_is_escaped() {
        let renderer = MarkdownRenderer::default();
        let html = renderer.render("use `<div>` and a & b");

        assert!(html.contains("<code>&lt;div&gt;</code>"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn test_custom_theme() {
        let renderer = MarkdownRenderer::new("InspiredGitHub").expect("bundled theme");
        assert_eq!(renderer.highlighter().theme(), "InspiredGitHub");
        assert!(MarkdownRenderer::new("missing").is_err());
    }
}
