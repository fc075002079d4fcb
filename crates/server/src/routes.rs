use axum::{routing::get, Json, Router};
use common::types::Health;

use crate::{observability, openapi, state::AppState};

pub mod notes;
pub mod scores;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// API, health, metrics and OpenAPI routes. Asset serving and the middleware
/// stack are added by `startup::build_app`.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/notes", get(notes::list_notes))
        .route("/api/scores", get(scores::top_scores).post(scores::submit_score))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(observability::metrics))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .merge(api)
}
