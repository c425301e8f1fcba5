use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::{MutationResponse, Note, NotePayload, RecordId};
use tracing::{debug, info, instrument, trace};

use super::{HandlerError, store_error};
use crate::schemas::{AppState, ErrorResponse};

/// Get all notes, newest first
#[utoipa::path(
    get,
    path = "/api/notes",
    tag = "notes",
    responses(
        (status = 200, description = "Notes retrieved successfully", body = [Note])
    )
)]
#[instrument(skip(state))]
pub async fn get_notes(State(state): State<AppState>) -> Json<Vec<Note>> {
    trace!("Entering get_notes function");
    let notes = state.store.notes.list().await;
    debug!("Returning {} notes", notes.len());
    Json(notes)
}

/// Create a new note
#[utoipa::path(
    post,
    path = "/api/notes",
    tag = "notes",
    request_body = NotePayload,
    responses(
        (status = 201, description = "Note created successfully", body = MutationResponse),
        (status = 400, description = "Invalid request")
    )
)]
#[instrument(skip(state))]
pub async fn create_note(
    State(state): State<AppState>,
    Valid(Json(payload)): Valid<Json<NotePayload>>,
) -> (StatusCode, Json<MutationResponse>) {
    trace!("Entering create_note function");
    let id = state
        .store
        .notes
        .insert(|id, created_at| Note {
            id,
            title: payload.title.clone(),
            content: Some(payload.content.clone()),
            category: payload.category.clone(),
            color: payload.color.clone(),
            created_at,
        })
        .await;

    info!("Note created successfully with ID: {}, title: {}", id, payload.title);
    (StatusCode::CREATED, Json(MutationResponse::created(id)))
}

/// Replace title, content, category and color of a note
#[utoipa::path(
    put,
    path = "/api/notes/{note_id}",
    tag = "notes",
    params(
        ("note_id" = i64, Path, description = "Note ID")
    ),
    request_body = NotePayload,
    responses(
        (status = 200, description = "Note updated successfully", body = MutationResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Note not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_note(
    State(state): State<AppState>,
    Path(note_id): Path<RecordId>,
    Valid(Json(payload)): Valid<Json<NotePayload>>,
) -> Result<Json<MutationResponse>, HandlerError> {
    trace!("Entering update_note function for ID: {}", note_id);
    state
        .store
        .notes
        .update(note_id, |note| {
            note.title = payload.title.clone();
            note.content = Some(payload.content.clone());
            note.category = payload.category.clone();
            note.color = payload.color.clone();
        })
        .await
        .map_err(store_error)?;

    info!("Note updated successfully with ID: {}", note_id);
    Ok(Json(MutationResponse::ok()))
}

/// Delete a note
#[utoipa::path(
    delete,
    path = "/api/notes/{note_id}",
    tag = "notes",
    params(
        ("note_id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note deleted successfully", body = MutationResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<RecordId>,
) -> Result<Json<MutationResponse>, HandlerError> {
    trace!("Entering delete_note function for ID: {}", note_id);
    state.store.notes.remove(note_id).await.map_err(store_error)?;

    info!("Note deleted successfully with ID: {}", note_id);
    Ok(Json(MutationResponse::ok()))
}
