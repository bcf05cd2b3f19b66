/**
 * Signup Handler
 *
 * This module implements the account creation handler for POST /user/signup.
 *
 * # Registration Process
 *
 * 1. Validate username, email format, and password length
 * 2. Check that no account exists for the email
 * 3. Hash the password with bcrypt
 * 4. Create the user and their default "Uncategorized" category in one
 *    transaction
 *
 * # Validation
 *
 * - Username: 3-30 chars, starts with a letter, alphanumeric + underscore
 * - Email must contain '@'
 * - Password must be at least 8 characters
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt (DEFAULT_COST) and never echoed back
 * - No tokens are issued at signup; the client logs in afterwards
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{SignupRequest, UserResponse};
use crate::auth::{password, users};
use crate::categories;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Sign up handler
///
/// Creates the account and seeds the user's default category in the same
/// transaction, so no account ever exists without its "Uncategorized"
/// bucket.
///
/// # Errors
///
/// * `400 Bad Request` - invalid username, email, or too-short password
/// * `409 Conflict` - an account with this email already exists
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    tracing::info!("Signup request for email: {}", request.email);

    if !is_valid_username(&request.username) {
        return Err(ApiError::bad_request(
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }

    if !request.email.contains('@') {
        return Err(ApiError::bad_request("Invalid email format"));
    }

    if request.password.len() < 8 {
        return Err(ApiError::bad_request(
            "Password must be at least 8 characters",
        ));
    }

    if users::get_user_by_email(&state.db, &request.email)
        .await?
        .is_some()
    {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(ApiError::conflict(
            "An account with this email already exists",
        ));
    }

    let password_hash = password::hash(&request.password)?;

    let mut tx = state.db.begin().await?;
    let user = users::create_user(&mut *tx, &request.username, &request.email, &password_hash)
        .await?;
    categories::db::create_category(&mut *tx, user.id, categories::DEFAULT_CATEGORY).await?;
    tx.commit().await?;

    tracing::info!("User created: {} ({})", user.username, user.email);

    Ok((StatusCode::CREATED, Json(user.into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("alice_42"));
        assert!(is_valid_username("Bob"));
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("1alice"));
        assert!(!is_valid_username("_alice"));
        assert!(!is_valid_username("al ice"));
        assert!(!is_valid_username(&"a".repeat(31)));
    }
}
