use axum::{extract::State, Json};
use models::Note;

use crate::errors::ApiError;
use crate::state::AppState;

/// All notes in creation order.
#[utoipa::path(
    get,
    path = "/api/notes",
    tag = "notes",
    responses(
        (status = 200, description = "All notes", body = [crate::openapi::NoteDoc]),
        (status = 500, description = "Internal error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state
        .storage
        .get_all_notes()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch notes", e))?;
    Ok(Json(notes))
}
