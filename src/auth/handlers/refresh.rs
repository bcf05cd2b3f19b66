/**
 * Token Refresh Handler
 *
 * This module implements POST /user/refresh, the only route guarded by the
 * refresh kind. It is not behind the access-token middleware: it extracts
 * the bearer credential itself and resolves it expecting
 * `TokenKind::Refresh`.
 *
 * Possessing a refresh token authorizes exactly one thing: minting a new
 * access token. The response never contains a new refresh token, so the
 * session cannot slide past the original refresh lifetime.
 */

use axum::{extract::State, http::HeaderMap, response::Json};

use crate::auth::handlers::types::AccessTokenResponse;
use crate::auth::resolver::resolve_identity;
use crate::auth::tokens::TokenKind;
use crate::error::ApiError;
use crate::middleware::auth::bearer_token;
use crate::server::state::AppState;

/// Refresh handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing header, invalid/expired token, an access
///   token presented instead of a refresh token, or a deleted account
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AccessTokenResponse>, ApiError> {
    let token = bearer_token(&headers)?;
    let user = resolve_identity(&state.db, &state.tokens, token, TokenKind::Refresh).await?;

    let access_token = state.tokens.issue_access(user.id)?;

    tracing::debug!("Issued fresh access token for user {}", user.id);

    Ok(Json(AccessTokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
