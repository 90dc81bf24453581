//! Build orchestration.
//!
//! Renders the home page into the output directory next to the static files.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use landing_core::Config;
use landing_parser::{MarkdownRenderer, SyntaxError};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    assets::{AssetError, StaticAssets},
    html::{HtmlError, HtmlGenerator},
    page::HomePage,
    sections::RenderContext,
    template::{TemplateError, TemplateRegistry},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),

    /// Template loading error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Asset error.
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),

    /// Syntax theme error.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    /// Layout serialization error.
    #[error("layout error: {0}")]
    Layout(#[from] serde_json::Error),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of pages written.
    pub pages: usize,

    /// Number of apps shown in the showcase.
    pub showcase_apps: usize,

    /// Number of static files copied.
    pub assets: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Site builder.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    output_dir: PathBuf,
    static_dir: Option<PathBuf>,
    template_dir: Option<PathBuf>,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: Config, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            output_dir: output_dir.into(),
            static_dir: None,
            template_dir: None,
        }
    }

    /// Set the static assets directory.
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Set a directory of template overrides.
    #[must_use]
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }

    /// Compose the home page without writing anything.
    pub fn render(&self) -> Result<HomePage> {
        let markdown = MarkdownRenderer::new(&self.config.build.syntax_theme)?;
        Ok(render_home(&self.config, &markdown))
    }

    /// Execute the full build.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(output = %self.output_dir.display(), "starting build");

        self.clean_output()?;

        let page = self.render()?;
        stats.showcase_apps = page.showcase_count();

        let mut templates = TemplateRegistry::new();
        if let Some(dir) = &self.template_dir {
            templates.load_dir(dir)?;
        }
        let html = HtmlGenerator::with_templates(templates).generate(&self.config.site, &page)?;
        self.write("index.html", &html)?;
        stats.pages = 1;

        if self.config.build.emit_layout {
            self.write("index.json", &page.to_json()?)?;
        }

        if let Some(static_dir) = &self.static_dir {
            stats.assets = StaticAssets::new(static_dir)
                .copy_to(&self.output_dir)?
                .len();
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            pages = stats.pages,
            showcase_apps = stats.showcase_apps,
            assets = stats.assets,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    fn clean_output(&self) -> Result<()> {
        if self.output_dir.exists() {
            debug!(dir = %self.output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.output_dir)?;
        }
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    fn write(&self, name: &str, contents: &str) -> Result<()> {
        let path = self.output_dir.join(name);
        fs::write(&path, contents)?;
        debug!(path = %path.display(), "wrote file");
        Ok(())
    }

    /// Output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Compose the home page for `config`.
pub fn render_home(config: &Config, markdown: &MarkdownRenderer) -> HomePage {
    HomePage::compose(&RenderContext::new(&config.site, markdown))
}
