//! Category HTTP Handlers
//!
//! All endpoints sit behind the access-token guard and operate only on the
//! caller's categories. Names are normalized to title case on the way in,
//! and the default "Uncategorized" category is protected from renaming,
//! deletion, and name collisions.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{db, DEFAULT_CATEGORY};
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::notes;
use crate::server::state::AppState;

/// Category creation / rename request
#[derive(Deserialize, Serialize, Debug)]
pub struct CategoryRequest {
    pub category_name: String,
}

/// Category view
#[derive(Serialize, Deserialize, Debug)]
pub struct CategoryResponse {
    pub id: i64,
    pub category_name: String,
}

impl From<db::Category> for CategoryResponse {
    fn from(category: db::Category) -> Self {
        Self {
            id: category.id,
            category_name: category.category_name,
        }
    }
}

/// Confirmation message
#[derive(Serialize, Deserialize, Debug)]
pub struct DetailResponse {
    pub detail: String,
}

/// Title-case a category name ("work stuff" -> "Work Stuff")
fn title_case(name: &str) -> String {
    name.trim()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize and validate a submitted category name
fn normalized_name(raw: &str) -> Result<String, ApiError> {
    let name = title_case(raw);
    if name.is_empty() {
        return Err(ApiError::bad_request("Category name cannot be empty"));
    }
    if name == DEFAULT_CATEGORY {
        return Err(ApiError::bad_request(
            "Cannot name with default category name",
        ));
    }
    Ok(name)
}

/// Create a category
pub async fn create_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let name = normalized_name(&request.category_name)?;

    if db::find_by_name(&state.db, user.id, &name).await?.is_some() {
        return Err(ApiError::conflict("Category already exists"));
    }

    let category = db::create_category(&state.db, user.id, &name).await?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

/// List the caller's categories
pub async fn get_categories(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let categories = db::list_categories(&state.db, user.id).await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// List the notes in one of the caller's categories
pub async fn get_category_notes(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(category_id): Path<i64>,
) -> Result<Json<Vec<notes::db::NoteSummary>>, ApiError> {
    let category = db::get_category(&state.db, user.id, category_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Category doesn't exist"))?;

    let notes = notes::db::list_by_category(&state.db, user.id, category.id).await?;
    Ok(Json(notes))
}

/// Rename a category
pub async fn edit_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(category_id): Path<i64>,
    Json(request): Json<CategoryRequest>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let category = db::get_category(&state.db, user.id, category_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Category doesn't exist"))?;

    if category.category_name == DEFAULT_CATEGORY {
        return Err(ApiError::forbidden("Cannot edit default category"));
    }

    let name = normalized_name(&request.category_name)?;

    let updated = db::rename_category(&state.db, user.id, category_id, &name)
        .await?
        .ok_or_else(|| ApiError::not_found("Category doesn't exist"))?;

    Ok(Json(updated.into()))
}

/// Delete a category
pub async fn delete_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(category_id): Path<i64>,
) -> Result<Json<DetailResponse>, ApiError> {
    let category = db::get_category(&state.db, user.id, category_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Category doesn't exist"))?;

    if category.category_name == DEFAULT_CATEGORY {
        return Err(ApiError::forbidden("Cannot delete default category"));
    }

    db::delete_category(&state.db, user.id, category_id).await?;

    Ok(Json(DetailResponse {
        detail: "Category deleted successfully".to_string(),
    }))
}
