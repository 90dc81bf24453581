//! Preview server.
//!
//! The home page is rendered on every request from read-only shared state,
//! so requests never wait on each other. Everything else under the site's
//! base URL is served from the static directory.

use std::{path::Path, sync::Arc};

use axum::{
    Router,
    extract::{Request, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use landing_core::Config;
use landing_generator::{HtmlGenerator, html::HtmlError, render_home};
use landing_parser::MarkdownRenderer;
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// Read-only inputs shared by all requests.
#[derive(Debug)]
pub struct ServerState {
    config: Config,
    markdown: MarkdownRenderer,
    html: HtmlGenerator,
}

impl ServerState {
    pub fn new(config: Config, markdown: MarkdownRenderer, html: HtmlGenerator) -> Self {
        Self {
            config,
            markdown,
            html,
        }
    }

    /// Prefix the preview is mounted under.
    pub fn base_url(&self) -> &str {
        &self.config.site.base_url
    }

    /// Render the full home page document.
    pub fn render(&self) -> Result<String, HtmlError> {
        let page = render_home(&self.config, &self.markdown);
        self.html.generate(&self.config.site, &page)
    }
}

/// Rendering failure reported as a 500.
pub struct RenderError(HtmlError);

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "failed to render home page");
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

/// Create the preview router, mounted under the site's base URL.
///
/// The base URL must start and end with `/`.
pub fn create_router(state: Arc<ServerState>, static_dir: &Path) -> Router {
    let base_url = state.base_url().to_string();
    let static_files = ServeDir::new(static_dir);

    let mut router = Router::new()
        .route(&base_url, get(home_handler))
        .route(&format!("{base_url}index.html"), get(home_handler));
    if base_url != "/" {
        router = router.route(base_url.trim_end_matches('/'), get(home_handler));
    }

    router
        .fallback(move |req: Request| serve_static(static_files.clone(), base_url.clone(), req))
        .with_state(state)
}

async fn home_handler(State(state): State<Arc<ServerState>>) -> Result<Html<String>, RenderError> {
    state.render().map(Html).map_err(RenderError)
}

/// Serve a file from the static directory. Paths outside the base URL are 404.
async fn serve_static(files: ServeDir, base_url: String, mut req: Request) -> Response {
    let Some(target) = static_target(req.uri(), &base_url) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    *req.uri_mut() = target;

    match files.oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// Rewrite a request URI to be relative to the static directory.
fn static_target(uri: &Uri, base_url: &str) -> Option<Uri> {
    let rest = uri.path().strip_prefix(base_url)?;
    let target = match uri.query() {
        Some(query) => format!("/{rest}?{query}"),
        None => format!("/{rest}"),
    };
    target.parse().ok()
}
