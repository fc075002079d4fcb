use std::collections::HashMap;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, Query, Request, State,
    },
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    Form, Json,
};
use chrono::{SecondsFormat, Utc};
use models::{score, ScoreEntry};
use serde::Deserialize;
use serde_json::{Map, Value};
use service::limit::ScoreLimit;
use tracing::info;

use crate::errors::ApiError;
use crate::observability::SCORES_SUBMITTED_TOTAL;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TopScoresQuery {
    pub limit: Option<String>,
}

/// Highest scores first.
///
/// An unreadable query string is treated like a missing `limit`.
#[utoipa::path(
    get,
    path = "/api/scores",
    tag = "scores",
    params(
        ("limit" = Option<String>, Query,
            description = "Entries to return; values that are not a positive number use 10")
    ),
    responses(
        (status = 200, description = "Top scores, highest first",
            body = [crate::openapi::ScoreEntryDoc]),
        (status = 500, description = "Internal error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn top_scores(
    State(state): State<AppState>,
    query: Result<Query<TopScoresQuery>, QueryRejection>,
) -> Result<Json<Vec<ScoreEntry>>, ApiError> {
    let raw = query.ok().and_then(|Query(q)| q.limit);
    let limit = ScoreLimit::from_query(raw.as_deref(), state.default_score_limit);
    let scores = state
        .storage
        .get_top_scores(limit.get())
        .await
        .map_err(|e| ApiError::internal("Failed to fetch scores", e))?;
    Ok(Json(scores))
}

/// Record a score. `createdAt` is stamped here, never taken from the client.
///
/// JSON and urlencoded form bodies are accepted. Form fields arrive as
/// strings, so a form `score` fails validation as a string.
#[utoipa::path(
    post,
    path = "/api/scores",
    tag = "scores",
    request_body = crate::openapi::ScoreSubmissionDoc,
    responses(
        (status = 201, description = "Score recorded", body = crate::openapi::ScoreEntryDoc),
        (status = 400, description = "Invalid data", body = crate::openapi::InvalidDataDoc),
        (status = 500, description = "Internal error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn submit_score(
    State(state): State<AppState>,
    req: Request,
) -> Result<(StatusCode, Json<ScoreEntry>), ApiError> {
    let body = submission_body(req).await?;

    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let input = score::parse_submission(&body, created_at)?;

    let entry = state
        .storage
        .add_score(input)
        .await
        .map_err(|e| ApiError::internal("Failed to add score", e))?;
    SCORES_SUBMITTED_TOTAL.inc();
    info!(event = "score_submitted", id = entry.id, score = entry.score, "score recorded");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Request body as a JSON value ready for validation.
async fn submission_body(req: Request) -> Result<Value, ApiError> {
    if is_form(req.headers()) {
        let Form(fields) = Form::<HashMap<String, String>>::from_request(req, &()).await?;
        let fields = fields.into_iter().map(|(k, v)| (k, Value::String(v))).collect();
        return Ok(Value::Object(fields));
    }

    match Json::<Value>::from_request(req, &()).await {
        Ok(Json(body)) => Ok(body),
        // any other content type: validate as an empty body
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Value::Object(Map::new())),
        Err(rejection) => Err(rejection.into()),
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| {
            ct.trim_start().to_ascii_lowercase().starts_with("application/x-www-form-urlencoded")
        })
}
