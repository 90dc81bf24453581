//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    app::{ApplicationRecord, pinned_apps},
    error::{CoreError, Result},
};

/// Main configuration structure for Landing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings and the showcase records.
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, used for the document title.
    pub title: String,

    /// Root path prefixed onto every relative link (e.g., "/" or "/docs-site/").
    pub base_url: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Applications built with the framework.
    pub users: Vec<ApplicationRecord>,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for the generated site.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Directory of static files copied verbatim into the output.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Syntax highlighting theme name.
    #[serde(default = "default_syntax_theme")]
    pub syntax_theme: String,

    /// Also write the composed page layout as JSON.
    #[serde(default)]
    pub emit_layout: bool,
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_syntax_theme() -> String {
    "base16-ocean.dark".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            static_dir: default_static_dir(),
            syntax_theme: default_syntax_theme(),
            emit_layout: false,
        }
    }
}

impl SiteConfig {
    /// Create a site configuration with no description.
    pub fn new(
        title: impl Into<String>,
        base_url: impl Into<String>,
        users: Vec<ApplicationRecord>,
    ) -> Self {
        Self {
            title: title.into(),
            base_url: base_url.into(),
            description: None,
            users,
        }
    }

    /// Join a relative path onto the base URL.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// The pinned applications, in configuration order.
    pub fn pinned_apps(&self) -> Vec<&ApplicationRecord> {
        pinned_apps(&self.users)
    }
}

impl Config {
    /// Wrap a site configuration with default build settings.
    pub fn new(site: SiteConfig) -> Self {
        Self {
            site,
            build: BuildConfig::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, letting `LANDING__*` environment variables override
    /// file values (e.g. `LANDING__SITE__BASE_URL`).
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::NotFound(path.to_path_buf()));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("LANDING").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Only structural problems fail here. Icons and links are left alone.
    fn validate(&self) -> Result<()> {
        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if !self.site.base_url.ends_with('/') {
            tracing::warn!(
                base_url = %self.site.base_url,
                "site.base_url should end with a slash; links are built by concatenation"
            );
        }

        if self.site.title.is_empty() {
            tracing::warn!("site.title is empty");
        }

        Ok(())
    }

    /// Get the full URL for a path relative to the base URL.
    pub fn url_for(&self, path: &str) -> String {
        self.site.url_for(path)
    }
}
