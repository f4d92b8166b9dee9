//! Request handlers for the notes API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::MutexGuard;

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::notes::{Note, NoteError, NoteStore, StoreStats};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub notes: usize,
    pub capacity: usize,
}

/// Body returned by the eviction endpoints.
#[derive(Debug, Serialize)]
pub struct EvictResponse {
    pub message: String,
    pub deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_note: Option<Note>,
    /// Flat title field read by the premium-upgrade web client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_note_title: Option<String>,
}

fn lock_store(state: &AppState) -> ApiResult<MutexGuard<'_, NoteStore>> {
    state
        .store
        .lock()
        .map_err(|e| ApiError::Internal(format!("store lock poisoned: {e}")))
}

/// Pull a required string field out of the request object.
///
/// Absent, `null`, and non-string values are all reported the same way.
fn string_field<'a>(body: &'a Value, field: &str, reason: &str) -> ApiResult<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| NoteError::validation(reason).into())
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let store = lock_store(&state)?;
    Ok(Json(HealthResponse {
        status: "healthy",
        notes: store.len(),
        capacity: store.capacity(),
    }))
}

/// GET /api/notes
pub async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<Note>>> {
    let notes = lock_store(&state)?.list_notes();
    tracing::debug!(count = notes.len(), "listing notes");
    Ok(Json(notes))
}

/// POST /api/notes
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let Json(body) = payload.map_err(|e| {
        tracing::debug!(error = %e, "rejected note payload");
        ApiError::InvalidPayload
    })?;
    // non-objects and `{}` carry no fields to validate
    if body.as_object().map_or(true, |fields| fields.is_empty()) {
        return Err(ApiError::InvalidPayload);
    }

    let title = string_field(&body, "title", "Title is required and must be a string")?;
    let content = string_field(&body, "content", "Content is required and must be a string")?;

    let note = lock_store(&state)?.add_note(title, content).map_err(|e| {
        tracing::info!(error = %e, "note rejected");
        ApiError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(note)))
}

/// POST /api/notes/evict-oldest (also served as /api/notes/premium-upgrade)
pub async fn evict_oldest(State(state): State<AppState>) -> ApiResult<Json<EvictResponse>> {
    let outcome = lock_store(&state)?.evict_oldest_if_full();

    let deleted_note = outcome.note().cloned();
    Ok(Json(EvictResponse {
        message: outcome.message(),
        deleted: outcome.evicted(),
        deleted_note_title: deleted_note.as_ref().map(|n| n.title.clone()),
        deleted_note,
    }))
}

/// GET /api/notes/stats
pub async fn stats(State(state): State<AppState>) -> ApiResult<Json<StoreStats>> {
    Ok(Json(lock_store(&state)?.stats()))
}
