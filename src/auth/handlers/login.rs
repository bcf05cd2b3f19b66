/**
 * Login Handler
 *
 * This module implements the credential check for POST /user/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password with bcrypt
 * 3. Issue an access + refresh token pair
 *
 * # Security
 *
 * - Unknown email and wrong password return the identical 401 response, so
 *   the endpoint cannot be used to enumerate accounts
 * - Password verification goes through bcrypt's constant-time comparison
 * - Passwords are never logged
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, TokenPairResponse};
use crate::auth::{password, users};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// Verifies the submitted credentials and returns both halves of the token
/// scheme: a short-lived access token for ordinary requests and a
/// long-lived refresh token good only for minting new access tokens.
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password, indistinguishably
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenPairResponse>, ApiError> {
    tracing::info!("Login request for email: {}", request.email);

    let user = users::get_user_by_email(&state.db, &request.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !password::verify(&request.password, &user.password_hash) {
        tracing::warn!("Failed login for email: {}", request.email);
        return Err(ApiError::InvalidCredentials);
    }

    let access_token = state.tokens.issue_access(user.id)?;
    let refresh_token = state.tokens.issue_refresh(user.id)?;

    tracing::info!("User logged in: {} ({})", user.username, user.email);

    Ok(Json(TokenPairResponse {
        access_token,
        refresh_token,
        token_type: "bearer".to_string(),
    }))
}
