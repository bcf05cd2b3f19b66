//! Note HTTP Handlers
//!
//! All endpoints sit behind the access-token guard; the resolved user
//! arrives as an explicit `CurrentUser` parameter and scopes every query,
//! so one user's note ids are invisible to another.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::db::{self, Note, NoteSummary};
use crate::categories;
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::server::state::AppState;

/// Note creation request
///
/// An omitted category leaves the note uncategorized.
#[derive(Deserialize, Serialize, Debug)]
pub struct NoteCreateRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category_id: Option<i64>,
}

/// Note edit request; omitted fields are left unchanged
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct NoteEditRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Full note view
#[derive(Serialize, Deserialize, Debug)]
pub struct NoteResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category_id: Option<i64>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            category_id: note.category_id,
        }
    }
}

/// Note view including the bookmark flag
#[derive(Serialize, Deserialize, Debug)]
pub struct BookmarkNoteResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub bookmark: bool,
}

impl From<Note> for BookmarkNoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            bookmark: note.bookmark,
        }
    }
}

/// Confirmation message
#[derive(Serialize, Deserialize, Debug)]
pub struct DetailResponse {
    pub detail: String,
}

fn note_not_found(note_id: i64) -> ApiError {
    ApiError::not_found(format!("Note with id: {note_id} not found"))
}

/// Create a note
///
/// A supplied `category_id` must reference one of the caller's categories.
pub async fn create_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<NoteCreateRequest>,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
    if let Some(category_id) = request.category_id {
        categories::db::get_category(&state.db, user.id, category_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Category doesn't exist"))?;
    }

    let note = db::create_note(
        &state.db,
        user.id,
        &request.title,
        &request.content,
        request.category_id,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(note.into())))
}

/// List all of the caller's notes
pub async fn get_all_notes(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<NoteSummary>>, ApiError> {
    Ok(Json(db::list_notes(&state.db, user.id).await?))
}

/// List the caller's uncategorized notes
pub async fn get_uncategorized(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<NoteSummary>>, ApiError> {
    Ok(Json(db::list_uncategorized(&state.db, user.id).await?))
}

/// List the caller's bookmarked notes
pub async fn get_bookmarks(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<NoteSummary>>, ApiError> {
    Ok(Json(db::list_bookmarked(&state.db, user.id).await?))
}

/// Get a single note
pub async fn get_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(note_id): Path<i64>,
) -> Result<Json<NoteResponse>, ApiError> {
    let note = db::get_note(&state.db, user.id, note_id)
        .await?
        .ok_or_else(|| note_not_found(note_id))?;

    Ok(Json(note.into()))
}

/// Edit a note's title and/or content
pub async fn edit_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(note_id): Path<i64>,
    Json(request): Json<NoteEditRequest>,
) -> Result<Json<NoteResponse>, ApiError> {
    let note = db::update_note(
        &state.db,
        user.id,
        note_id,
        request.title.as_deref(),
        request.content.as_deref(),
    )
    .await?
    .ok_or_else(|| note_not_found(note_id))?;

    Ok(Json(note.into()))
}

/// Delete a note
pub async fn delete_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(note_id): Path<i64>,
) -> Result<Json<DetailResponse>, ApiError> {
    if !db::delete_note(&state.db, user.id, note_id).await? {
        return Err(note_not_found(note_id));
    }

    Ok(Json(DetailResponse {
        detail: "Note deleted successfully".to_string(),
    }))
}

/// Toggle a note's bookmark flag
pub async fn toggle_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(note_id): Path<i64>,
) -> Result<Json<BookmarkNoteResponse>, ApiError> {
    let note = db::toggle_bookmark(&state.db, user.id, note_id)
        .await?
        .ok_or_else(|| note_not_found(note_id))?;

    Ok(Json(note.into()))
}

/// Move a note into one of the caller's categories
///
/// A `category_id` of 0 clears the assignment instead.
pub async fn categorize(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((note_id, category_id)): Path<(i64, i64)>,
) -> Result<Json<NoteResponse>, ApiError> {
    let note = db::get_note(&state.db, user.id, note_id)
        .await?
        .ok_or_else(|| note_not_found(note_id))?;

    let target = if category_id == 0 {
        None
    } else {
        Some(category_id)
    };

    if note.category_id == target {
        return Err(ApiError::conflict("Note already in category"));
    }

    if let Some(category_id) = target {
        categories::db::get_category(&state.db, user.id, category_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Category doesn't exist"))?;
    }

    let updated = db::set_category(&state.db, user.id, note_id, target)
        .await?
        .ok_or_else(|| note_not_found(note_id))?;

    Ok(Json(updated.into()))
}
