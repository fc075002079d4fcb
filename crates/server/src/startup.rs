use std::sync::Arc;

use axum::{middleware, Router};
use configs::AppConfig;
use service::{MemStorage, Storage};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::{
    assets,
    errors::{self, StartupError},
    observability, request_log, routes,
    state::AppState,
};

/// Full application: API routes, asset fallback for the configured mode, and
/// the middleware stack.
pub fn build_app(config: &AppConfig, state: AppState) -> Result<Router, StartupError> {
    observability::init();
    let assets = assets::asset_router(config.server.mode, &config.assets)?;

    Ok(with_middleware(routes::build_router(state).fallback_service(assets)))
}

/// Panic catching, `/api` request logging and tracing spans around `router`.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(errors::panic_response))
        .layer(middleware::from_fn(request_log::log_api_requests))
        .layer(
            TraceLayer::new_for_http()
                // one span per request, method and path included
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG).include_headers(false))
                // 5xx and transport failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

/// Public entry: build the store and the app, then serve until Ctrl+C or SIGTERM.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let storage: Arc<dyn Storage> = Arc::new(MemStorage::new());
    let state = AppState::new(storage, config.scores.default_limit);
    let app = build_app(&config, state)?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(
        addr = %listener.local_addr()?,
        mode = %config.server.mode,
        "serving on port {}",
        config.server.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!(event = "shutdown_signal", "received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!(event = "shutdown_signal", "received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
