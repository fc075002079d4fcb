//! Client asset serving.
//!
//! Development serves the client sources and renders `index.html` per
//! request with a cache-busting query on the entry script. Production serves
//! the prebuilt bundle and falls back to its `index.html` for client routes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::handler::HandlerWithoutStateExt;
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::Router;
use configs::{AssetsConfig, Mode};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{ApiError, StartupError};

/// Router that answers every request not claimed by an API route.
pub fn asset_router(mode: Mode, assets: &AssetsConfig) -> Result<Router, StartupError> {
    match mode {
        Mode::Development => Ok(development(assets)),
        Mode::Production => production(assets),
    }
}

fn development(assets: &AssetsConfig) -> Router {
    let client_dir = PathBuf::from(&assets.client_dir);
    if !client_dir.is_dir() {
        warn!(client_dir = %client_dir.display(), "client directory not found");
    }
    info!(client_dir = %client_dir.display(), "serving client sources (development)");

    let index = Arc::new(DevIndex {
        path: client_dir.join("index.html"),
        entry: assets.dev_entry.clone(),
    });
    let render = {
        let index = Arc::clone(&index);
        move || async move { index.render().await }
    };

    // files answer GET/HEAD only; other methods and misses render the page
    let files = ServeDir::new(&client_dir)
        .append_index_html_on_directories(false)
        .call_fallback_on_method_not_allowed(true)
        .fallback(render.into_service());
    Router::new()
        .fallback_service(files)
        .layer(middleware::from_fn_with_state(index, render_html_pages))
}

/// Any `*.html` path is the client page, never the raw template.
async fn render_html_pages(
    State(index): State<Arc<DevIndex>>,
    req: Request,
    next: Next,
) -> Response {
    if req.uri().path().ends_with(".html") {
        return index.render().await.into_response();
    }
    next.run(req).await
}

fn production(assets: &AssetsConfig) -> Result<Router, StartupError> {
    let dist = Path::new(&assets.dist_dir);
    if !dist.is_dir() {
        return Err(StartupError::InvalidConfig(format!(
            "could not find the build directory: {}, make sure to build the client first",
            dist.display()
        )));
    }
    info!(dist_dir = %dist.display(), "serving built client (production)");

    let files = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));
    Ok(Router::new().fallback_service(files))
}

struct DevIndex {
    path: PathBuf,
    entry: String,
}

impl DevIndex {
    async fn render(&self) -> Result<Html<String>, ApiError> {
        let template = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| {
                let detail = format!("{}: {e}", self.path.display());
                ApiError::internal("Failed to render client page", detail)
            })?;
        let token = Uuid::new_v4().simple().to_string();
        Ok(Html(inject_cache_buster(&template, &self.entry, &token)))
    }
}

/// Rewrite `src="<entry>"` to `src="<entry>?v=<token>"`.
pub fn inject_cache_buster(template: &str, entry: &str, token: &str) -> String {
    template.replace(&format!("src=\"{entry}\""), &format!("src=\"{entry}?v={token}\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_buster_rewrites_only_the_entry() {
        let html = concat!(
            r#"<script type="module" src="/src/main.tsx"></script>"#,
            r#"<script src="/other.js"></script>"#,
        );
        let out = inject_cache_buster(html, "/src/main.tsx", "abc");
        assert!(out.contains(r#"src="/src/main.tsx?v=abc""#));
        assert!(out.contains(r#"src="/other.js""#));
    }

    #[test]
    fn template_without_entry_is_unchanged() {
        let html = "<html><body></body></html>";
        assert_eq!(inject_cache_buster(html, "/src/main.tsx", "abc"), html);
    }

    #[test]
    fn production_requires_build_dir() {
        let assets = AssetsConfig {
            dist_dir: std::env::temp_dir()
                .join(format!("scoreboard_missing_{}", Uuid::new_v4()))
                .display()
                .to_string(),
            ..AssetsConfig::default()
        };
        let Err(err) = asset_router(Mode::Production, &assets) else {
            panic!("expected missing build directory to fail");
        };
        assert!(err.to_string().contains("make sure to build the client first"));
    }
}
