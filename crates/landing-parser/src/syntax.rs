//! Syntax highlighting for code samples.

use syntect::{highlighting::ThemeSet, html::highlighted_html_for_string, parsing::SyntaxSet};
use thiserror::Error;

use crate::html_escape;

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Syntax highlighting errors.
#[derive(Debug, Error)]
pub enum SyntaxError {
    /// The requested theme is not bundled with syntect.
    #[error("unknown syntax theme: {name} (available: {available})")]
    UnknownTheme { name: String, available: String },
}

/// Syntax highlighter using syntect's bundled syntaxes and themes.
#[derive(Debug)]
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme: String,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl SyntaxHighlighter {
    /// Create a highlighter for the named theme.
    pub fn new(theme: &str) -> Result<Self, SyntaxError> {
        let mut highlighter = Self::default();
        highlighter.set_theme(theme)?;
        Ok(highlighter)
    }

    /// Theme names bundled with syntect, sorted.
    pub fn available_themes(&self) -> Vec<&str> {
        let mut themes: Vec<_> = self.theme_set.themes.keys().map(String::as_str).collect();
        themes.sort_unstable();
        themes
    }

    /// Name of the active theme.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Switch theme. Unknown names are rejected and the current theme kept.
    pub fn set_theme(&mut self, theme: &str) -> Result<(), SyntaxError> {
        if !self.theme_set.themes.contains_key(theme) {
            return Err(SyntaxError::UnknownTheme {
                name: theme.to_string(),
                available: self.available_themes().join(", "),
            });
        }
        self.theme = theme.to_string();
        Ok(())
    }

    /// Highlight `code` written in `lang`.
    ///
    /// Unrecognised languages get a plain escaped `<pre><code>` block.
    pub fn highlight(&self, code: &str, lang: Option<&str>) -> String {
        let syntax = lang.and_then(|l| self.syntax_set.find_syntax_by_token(l));
        let theme = self.theme_set.themes.get(&self.theme);

        if let (Some(syntax), Some(theme)) = (syntax, theme) {
            match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
                Ok(html) => return html,
                Err(e) => tracing::debug!(error = %e, ?lang, "highlighting failed, using plain block"),
            }
        }

        plain_block(code, lang)
    }
}

fn plain_block(code: &str, lang: Option<&str>) -> String {
    let lang_class = lang
        .map(|l| format!(" class=\"language-{}\"", html_escape(l)))
        .unwrap_or_default();
    format!("<pre><code{lang_class}>{}</code></pre>", html_escape(code))
}
