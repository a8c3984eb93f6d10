//! Note API endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use entities::Note;
use note_store::NewNote;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{ServerError, ServerResult};
use crate::state::SharedState;

/// Payload for creating a note.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    /// Note body.
    pub text: String,
}

/// Lists all notes.
#[utoipa::path(
    get,
    path = "/notes",
    tag = "notes",
    responses(
        (status = 200, description = "All stored notes", body = [Note])
    )
)]
pub async fn list_notes(State(state): State<SharedState>) -> ServerResult<Json<Vec<Note>>> {
    let notes = state.store.list().await?;
    Ok(Json(notes))
}

/// Creates a new note.
#[utoipa::path(
    post,
    path = "/notes",
    tag = "notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 422, description = "Malformed payload")
    )
)]
pub async fn create_note(
    State(state): State<SharedState>,
    Json(request): Json<CreateNoteRequest>,
) -> ServerResult<(StatusCode, Json<Note>)> {
    let note = state
        .store
        .create(NewNote { text: request.text })
        .await?;

    Ok((StatusCode::CREATED, Json(note)))
}

/// Gets a note by id.
#[utoipa::path(
    get,
    path = "/notes/{id}",
    tag = "notes",
    params(("id" = i64, Path, description = "Note identifier")),
    responses(
        (status = 200, description = "The note", body = Note),
        (status = 404, description = "Unknown note id")
    )
)]
pub async fn get_note(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> ServerResult<Json<Note>> {
    let note = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Note not found".to_string()))?;

    Ok(Json(note))
}
