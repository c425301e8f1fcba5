use common::{Note, NotePayload, RecordId};

use super::{ApiResult, HttpApiClient};

/// Get all notes
pub async fn get_notes(client: &HttpApiClient) -> ApiResult<Vec<Note>> {
    tracing::trace!("Fetching all notes");
    let result = client.get::<Vec<Note>>("/api/notes").await;
    match &result {
        Ok(notes) => tracing::info!("Fetched {} notes", notes.len()),
        Err(e) => tracing::error!("Failed to fetch notes: {}", e),
    }
    result
}

/// Create a new note
pub async fn create_note(client: &HttpApiClient, payload: &NotePayload) -> ApiResult<Option<RecordId>> {
    tracing::debug!("Creating new note: {}", payload.title);
    let result = client.post("/api/notes", Some(payload)).await.map(|ack| ack.id);
    match &result {
        Ok(id) => tracing::info!("Successfully created note '{}' (ID: {:?})", payload.title, id),
        Err(e) => tracing::error!("Failed to create note '{}': {}", payload.title, e),
    }
    result
}

/// Update an existing note
pub async fn update_note(client: &HttpApiClient, note_id: RecordId, payload: &NotePayload) -> ApiResult<()> {
    tracing::debug!("Updating note ID {}: {}", note_id, payload.title);
    let result = client.put(&format!("/api/notes/{}", note_id), payload).await.map(|_| ());
    match &result {
        Ok(()) => tracing::info!("Successfully updated note ID {}", note_id),
        Err(e) => tracing::error!("Failed to update note {}: {}", note_id, e),
    }
    result
}

/// Delete a note
pub async fn delete_note(client: &HttpApiClient, note_id: RecordId) -> ApiResult<()> {
    tracing::debug!("Deleting note ID: {}", note_id);
    let result = client.delete(&format!("/api/notes/{}", note_id)).await.map(|_| ());
    match &result {
        Ok(()) => tracing::info!("Successfully deleted note ID: {}", note_id),
        Err(e) => tracing::error!("Failed to delete note {}: {}", note_id, e),
    }
    result
}
