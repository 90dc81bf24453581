//! Serve command - local preview server

use std::{path::Path, sync::Arc};

use color_eyre::eyre::{Result, WrapErr, bail};
use landing_core::Config;
use landing_generator::{HtmlGenerator, TemplateRegistry};
use landing_parser::MarkdownRenderer;
use tokio::net::TcpListener;

use super::{TEMPLATES_DIR, site_path};
use crate::server::{ServerState, create_router};

/// Run the serve command.
///
/// The page and static files are mounted under `base_url`, which replaces the
/// configured one so every link on the page resolves against the preview.
pub async fn run(config_path: &Path, port: u16, base_url: &str, open_browser: bool) -> Result<()> {
    tracing::info!(?config_path, port, base_url, "Starting preview server");

    if !base_url.starts_with('/') || !base_url.ends_with('/') {
        bail!("Preview base URL must start and end with '/': {base_url}");
    }

    let mut config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    if config.site.base_url != base_url {
        tracing::info!(
            configured = %config.site.base_url,
            base_url,
            "Using preview base_url"
        );
        config.site.base_url = base_url.to_string();
    }

    let markdown =
        MarkdownRenderer::new(&config.build.syntax_theme).wrap_err("Invalid syntax theme")?;

    let mut templates = TemplateRegistry::new();
    templates
        .load_dir(&site_path(config_path, TEMPLATES_DIR))
        .wrap_err("Failed to load templates")?;

    let static_dir = site_path(config_path, &config.build.static_dir);
    let state = Arc::new(ServerState::new(
        config,
        markdown,
        HtmlGenerator::with_templates(templates),
    ));

    // Fail fast instead of on the first request.
    state.render().wrap_err("Failed to render home page")?;

    let app = create_router(state, &static_dir);
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    let url = format!("http://{addr}{base_url}");
    println!("  Preview running at {url}");
    println!("  Static files from {}", static_dir.display());
    println!("  Press Ctrl+C to stop");
    println!();

    if open_browser {
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_unanchored_base_url() {
        let err = run(Path::new("site.toml"), 0, "docs/", false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("must start and end with '/'"));
    }
}
