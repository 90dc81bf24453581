//! Landing Parser Library
//!
//! Renders the Markdown blocks embedded in the home page, with
//! syntax-highlighted code fences.

pub mod markdown;
pub mod syntax;

pub use markdown::MarkdownRenderer;
pub use syntax::{SyntaxError, SyntaxHighlighter};

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
