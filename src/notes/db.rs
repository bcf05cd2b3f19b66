//! Database operations for notes
//!
//! Every query is scoped by `user_id`: a note id belonging to another user
//! behaves exactly like a nonexistent one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Note row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub category_id: Option<i64>,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    pub bookmark: bool,
}

/// Listing view: id and title only
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct NoteSummary {
    pub id: i64,
    pub title: String,
}

const NOTE_COLUMNS: &str =
    "id, user_id, title, content, category_id, date_created, date_modified, bookmark";

/// Create a note
pub async fn create_note(
    pool: &PgPool,
    user_id: i64,
    title: &str,
    content: &str,
    category_id: Option<i64>,
) -> Result<Note, sqlx::Error> {
    sqlx::query_as::<_, Note>(&format!(
        r#"
        INSERT INTO notes (user_id, title, content, category_id)
        VALUES ($1, $2, $3, $4)
        RETURNING {NOTE_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(title)
    .bind(content)
    .bind(category_id)
    .fetch_one(pool)
    .await
}

/// List all of a user's notes
pub async fn list_notes(pool: &PgPool, user_id: i64) -> Result<Vec<NoteSummary>, sqlx::Error> {
    sqlx::query_as::<_, NoteSummary>(
        "SELECT id, title FROM notes WHERE user_id = $1 ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// List a user's notes with no category
pub async fn list_uncategorized(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<NoteSummary>, sqlx::Error> {
    sqlx::query_as::<_, NoteSummary>(
        "SELECT id, title FROM notes WHERE user_id = $1 AND category_id IS NULL ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// List a user's bookmarked notes
pub async fn list_bookmarked(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<NoteSummary>, sqlx::Error> {
    sqlx::query_as::<_, NoteSummary>(
        "SELECT id, title FROM notes WHERE user_id = $1 AND bookmark ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// List a user's notes in a category
pub async fn list_by_category(
    pool: &PgPool,
    user_id: i64,
    category_id: i64,
) -> Result<Vec<NoteSummary>, sqlx::Error> {
    sqlx::query_as::<_, NoteSummary>(
        "SELECT id, title FROM notes WHERE user_id = $1 AND category_id = $2 ORDER BY id",
    )
    .bind(user_id)
    .bind(category_id)
    .fetch_all(pool)
    .await
}

/// Get one of a user's notes by id
pub async fn get_note(
    pool: &PgPool,
    user_id: i64,
    note_id: i64,
) -> Result<Option<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(&format!(
        "SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1 AND user_id = $2"
    ))
    .bind(note_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Update a note's title and/or content
///
/// Omitted fields keep their current value; `date_modified` is bumped.
pub async fn update_note(
    pool: &PgPool,
    user_id: i64,
    note_id: i64,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<Option<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(&format!(
        r#"
        UPDATE notes
        SET title = COALESCE($1, title),
            content = COALESCE($2, content),
            date_modified = now()
        WHERE id = $3 AND user_id = $4
        RETURNING {NOTE_COLUMNS}
        "#
    ))
    .bind(title)
    .bind(content)
    .bind(note_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Delete one of a user's notes
pub async fn delete_note(pool: &PgPool, user_id: i64, note_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
        .bind(note_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Flip a note's bookmark flag
pub async fn toggle_bookmark(
    pool: &PgPool,
    user_id: i64,
    note_id: i64,
) -> Result<Option<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(&format!(
        r#"
        UPDATE notes
        SET bookmark = NOT bookmark, date_modified = now()
        WHERE id = $1 AND user_id = $2
        RETURNING {NOTE_COLUMNS}
        "#
    ))
    .bind(note_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Move a note into a category (or out of all of them with NULL)
pub async fn set_category(
    pool: &PgPool,
    user_id: i64,
    note_id: i64,
    category_id: Option<i64>,
) -> Result<Option<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(&format!(
        r#"
        UPDATE notes
        SET category_id = $1, date_modified = now()
        WHERE id = $2 AND user_id = $3
        RETURNING {NOTE_COLUMNS}
        "#
    ))
    .bind(category_id)
    .bind(note_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
