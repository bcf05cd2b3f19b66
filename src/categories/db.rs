//! Database operations for note categories
//!
//! Every query is scoped by `user_id`; one user's category ids are
//! meaningless in another user's requests.

use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

/// Category row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub user_id: i64,
    pub category_name: String,
}

/// Create a category for a user
///
/// Takes an executor so signup can seed the default category inside its
/// account-creation transaction.
pub async fn create_category(
    db: impl PgExecutor<'_>,
    user_id: i64,
    category_name: &str,
) -> Result<Category, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        INSERT INTO note_categories (user_id, category_name)
        VALUES ($1, $2)
        RETURNING id, user_id, category_name
        "#,
    )
    .bind(user_id)
    .bind(category_name)
    .fetch_one(db)
    .await
}

/// Find a user's category by name
pub async fn find_by_name(
    pool: &PgPool,
    user_id: i64,
    category_name: &str,
) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, user_id, category_name
        FROM note_categories
        WHERE user_id = $1 AND category_name = $2
        "#,
    )
    .bind(user_id)
    .bind(category_name)
    .fetch_optional(pool)
    .await
}

/// List a user's categories
pub async fn list_categories(pool: &PgPool, user_id: i64) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, user_id, category_name
        FROM note_categories
        WHERE user_id = $1
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Get one of a user's categories by id
pub async fn get_category(
    pool: &PgPool,
    user_id: i64,
    category_id: i64,
) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, user_id, category_name
        FROM note_categories
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(category_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Rename one of a user's categories
pub async fn rename_category(
    pool: &PgPool,
    user_id: i64,
    category_id: i64,
    category_name: &str,
) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        UPDATE note_categories
        SET category_name = $1
        WHERE id = $2 AND user_id = $3
        RETURNING id, user_id, category_name
        "#,
    )
    .bind(category_name)
    .bind(category_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Delete one of a user's categories
///
/// Member notes fall back to uncategorized via the FK's SET NULL.
pub async fn delete_category(
    pool: &PgPool,
    user_id: i64,
    category_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM note_categories WHERE id = $1 AND user_id = $2")
        .bind(category_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
