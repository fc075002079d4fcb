use axum::Json;
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteDoc {
    pub id: u64,
    pub date: String,
    pub content: String,
    /// `0` or `1`
    pub is_highlighted: u8,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntryDoc {
    pub id: u64,
    pub wallet_address: String,
    pub score: i64,
    /// ISO-8601 UTC timestamp assigned by the server
    pub created_at: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmissionDoc {
    pub wallet_address: String,
    pub score: i64,
}

#[derive(Serialize, ToSchema)]
pub struct ValidationIssueDoc {
    pub code: String,
    pub expected: Option<String>,
    pub received: Option<String>,
    pub path: Vec<String>,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct InvalidDataDoc {
    pub message: String,
    pub errors: Vec<ValidationIssueDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::notes::list_notes,
        crate::routes::scores::top_scores,
        crate::routes::scores::submit_score,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            NoteDoc,
            ScoreEntryDoc,
            ScoreSubmissionDoc,
            ValidationIssueDoc,
            InvalidDataDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "notes"),
        (name = "scores")
    )
)]
pub struct ApiDoc;

/// `GET /api-docs/openapi.json`
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
