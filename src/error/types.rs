/**
 * API Error Types
 *
 * This module defines the error type used by all HTTP handlers. Every
 * variant maps to a status code and a caller-facing message; the mapping
 * lives here and the HTTP rendering lives in `conversion.rs`.
 *
 * # Security
 *
 * The two authentication variants are deliberately opaque:
 *
 * - `InvalidCredentials` never distinguishes "no such user" from "wrong
 *   password"
 * - `Unauthenticated` never distinguishes "expired" from "forged" from
 *   "wrong token kind" from "account deleted"
 *
 * Collapsing the failure reasons closes an information side channel; the
 * internal reason is only ever logged at debug level by the resolver.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors returned by API handlers
///
/// Each variant carries what the client is allowed to see. Internal error
/// sources (`Database`, `Hash`, `Token`) convert via `#[from]` so handlers
/// can propagate with `?`; their detail never reaches the response body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login failed: unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token rejected: malformed, expired, wrong kind, or dangling subject
    #[error("Could not validate credentials")]
    Unauthenticated,

    /// Authenticated but the action is not allowed
    #[error("{0}")]
    Forbidden(String),

    /// The addressed resource does not exist (or belongs to another user)
    #[error("{0}")]
    NotFound(String),

    /// The request conflicts with existing state
    #[error("{0}")]
    Conflict(String),

    /// The request payload failed validation
    #[error("{0}")]
    BadRequest(String),

    /// Database query failure
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("Password hashing error")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("Token signing error")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a new forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create a new bad-request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the caller-facing error message
    ///
    /// Internal variants return a fixed generic message; their source detail
    /// is logged, never returned.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::forbidden("nope").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::not_found("missing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::conflict("exists").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::bad_request("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_internal_errors_have_generic_message() {
        let error = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Internal server error");
    }

    #[test]
    fn test_auth_errors_share_no_detail() {
        // Both login failure legs render the same text, and all token
        // failure legs render the same text.
        assert_eq!(ApiError::InvalidCredentials.message(), "Invalid credentials");
        assert_eq!(
            ApiError::Unauthenticated.message(),
            "Could not validate credentials"
        );
    }

    #[test]
    fn test_request_errors_keep_their_message() {
        let error = ApiError::not_found("Note with id: 7 not found");
        assert_eq!(error.message(), "Note with id: 7 not found");
    }
}
