/**
 * Authentication Middleware
 *
 * This module provides the middleware protecting routes that require an
 * authenticated user. It extracts the bearer token from the Authorization
 * header, resolves it (expecting the access kind), and attaches the
 * resolved user to the request so handlers can take it as an explicit
 * `CurrentUser` parameter.
 *
 * Returns the standard opaque 401 if the header is missing or the token
 * fails resolution for any reason.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::resolver::resolve_identity;
use crate::auth::tokens::TokenKind;
use crate::auth::users::User;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Extract the bearer credential from the Authorization header
///
/// Also used by the refresh endpoint, which resolves the token itself with
/// the refresh kind instead of going through this middleware.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| {
            tracing::debug!("missing or malformed Authorization header");
            ApiError::Unauthenticated
        })
}

/// Access-token guard
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Resolves it to a live user, expecting `TokenKind::Access`
/// 3. Attaches the user to the request extensions for handlers
///
/// A refresh token presented here fails exactly like a forged one.
pub async fn require_access_token(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;
    let user = resolve_identity(&app_state.db, &app_state.tokens, token, TokenKind::Access).await?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Handlers behind the guard take this as a parameter, making the identity
/// an explicit argument instead of ambient request state.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                tracing::warn!("CurrentUser extracted on a route without the access guard");
                ApiError::Unauthenticated
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));

        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header_is_unauthenticated() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers).unwrap_err(),
            ApiError::Unauthenticated
        ));
    }

    #[test]
    fn test_non_bearer_scheme_is_unauthenticated() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));

        assert!(matches!(
            bearer_token(&headers).unwrap_err(),
            ApiError::Unauthenticated
        ));
    }
}
