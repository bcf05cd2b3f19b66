/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication and account handlers.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's chosen display name
    pub username: String,
    /// User's email address (login identifier)
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be verified against the stored hash)
    pub password: String,
}

/// Token pair returned by login
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenPairResponse {
    /// Short-lived token for ordinary operations
    pub access_token: String,
    /// Long-lived token, good only for minting new access tokens
    pub refresh_token: String,
    /// Always "bearer"
    pub token_type: String,
}

/// Single access token returned by refresh
///
/// Deliberately contains no refresh token: refreshing does not extend the
/// session beyond the original refresh token's lifetime.
#[derive(Serialize, Deserialize, Debug)]
pub struct AccessTokenResponse {
    pub access_token: String,
    /// Always "bearer"
    pub token_type: String,
}

/// Public user view (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// Profile edit request; omitted fields are left unchanged
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UserEditRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Password change request
#[derive(Deserialize, Serialize, Debug)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Confirmation message for destructive operations
#[derive(Serialize, Deserialize, Debug)]
pub struct DetailResponse {
    pub detail: String,
}
