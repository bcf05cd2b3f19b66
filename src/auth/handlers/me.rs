/**
 * Current-Account Handlers
 *
 * This module implements the endpoints operating on the authenticated
 * account:
 *
 * - `GET /user/view/me` - public view of the account
 * - `PUT /user/edit/me` - partial profile update
 * - `PUT /user/change-password` - password rotation
 * - `DELETE /user/delete/me` - account deletion (notes/categories cascade)
 *
 * All four sit behind the access-token guard and take the resolved identity
 * as an explicit `CurrentUser` parameter.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{
    ChangePasswordRequest, DetailResponse, UserEditRequest, UserResponse,
};
use crate::auth::{password, users};
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::server::state::AppState;

/// Get current user handler
pub async fn view_me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(user.into())
}

/// Edit current user handler
///
/// Omitted fields keep their current value. Changing the email to one
/// already registered is a conflict.
pub async fn edit_me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<UserEditRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    if let Some(email) = &request.email {
        if !email.contains('@') {
            return Err(ApiError::bad_request("Invalid email format"));
        }
    }

    let updated = users::update_profile(
        &state.db,
        user.id,
        request.username.as_deref(),
        request.email.as_deref(),
    )
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return ApiError::conflict("An account with this email already exists");
            }
        }
        ApiError::from(e)
    })?
    .ok_or(ApiError::Unauthenticated)?;

    Ok(Json(updated.into()))
}

/// Change password handler
///
/// # Errors
///
/// * `403 Forbidden` - the current password does not match
/// * `400 Bad Request` - the new password repeats the current one or is too
///   short
pub async fn change_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<DetailResponse>, ApiError> {
    if !password::verify(&request.current_password, &user.password_hash) {
        return Err(ApiError::forbidden("Current password is incorrect"));
    }

    if request.new_password.len() < 8 {
        return Err(ApiError::bad_request(
            "Password must be at least 8 characters",
        ));
    }

    if password::verify(&request.new_password, &user.password_hash) {
        return Err(ApiError::bad_request(
            "New password cannot be the same as the current password",
        ));
    }

    let password_hash = password::hash(&request.new_password)?;
    users::update_password(&state.db, user.id, &password_hash).await?;

    tracing::info!("Password updated for user {}", user.id);

    Ok(Json(DetailResponse {
        detail: "Password updated successfully".to_string(),
    }))
}

/// Delete current user handler
pub async fn delete_me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<DetailResponse>, ApiError> {
    users::delete_user(&state.db, user.id).await?;

    tracing::info!("Account deleted: {}", user.id);

    Ok(Json(DetailResponse {
        detail: "Account successfully deleted".to_string(),
    }))
}
