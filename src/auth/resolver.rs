/**
 * Identity Resolution
 *
 * This module turns a presented bearer token into a verified user record,
 * or a rejection. It is the single check-point every protected operation
 * goes through: the middleware instantiates it expecting access tokens, and
 * the refresh endpoint instantiates it expecting refresh tokens.
 *
 * # Algorithm
 *
 * 1. Decode the token (signature + expiry) via the codec
 * 2. Compare the embedded kind against the expected kind
 * 3. Look up the subject in the user store
 *
 * Any failed step yields the same `ApiError::Unauthenticated`; which step
 * failed is logged at debug level and never observable from outside. A
 * token whose subject has been deleted fails closed at step 3.
 */

use sqlx::PgPool;

use crate::auth::tokens::{TokenCodec, TokenKind};
use crate::auth::users::{self, User};
use crate::error::ApiError;

/// Why a token was rejected, for diagnostics only
///
/// Never rendered to the client; every variant collapses into the same
/// external `Unauthenticated` response.
#[derive(Debug)]
enum AuthFailure {
    /// Signature, structure, or expiry check failed
    Decode,
    /// Token is valid but of the wrong kind for this call site
    KindMismatch,
    /// Token is valid but its subject no longer exists
    UnknownSubject,
}

fn reject(reason: AuthFailure) -> ApiError {
    tracing::debug!(reason = ?reason, "rejected bearer token");
    ApiError::Unauthenticated
}

/// Resolve a bearer token of the expected kind to a live user record
///
/// # Arguments
///
/// * `pool` - user store
/// * `codec` - token codec configured at startup
/// * `token` - the presented token string
/// * `expected_kind` - which kind this call site accepts
///
/// # Errors
///
/// `ApiError::Unauthenticated` for every token problem, `ApiError::Database`
/// only if the store itself fails.
pub async fn resolve_identity(
    pool: &PgPool,
    codec: &TokenCodec,
    token: &str,
    expected_kind: TokenKind,
) -> Result<User, ApiError> {
    let claims = match codec.decode(token) {
        Ok(claims) => claims,
        Err(_) => return Err(reject(AuthFailure::Decode)),
    };

    if claims.token_kind != expected_kind {
        return Err(reject(AuthFailure::KindMismatch));
    }

    match users::get_user_by_id(pool, claims.user_id).await? {
        Some(user) => Ok(user),
        None => Err(reject(AuthFailure::UnknownSubject)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::config::AuthConfig;
    use jsonwebtoken::Algorithm;

    fn test_codec() -> TokenCodec {
        TokenCodec::new(&AuthConfig {
            secret: "test-secret".to_string(),
            algorithm: Algorithm::HS256,
            access_token_minutes: 15,
            refresh_token_days: 7,
        })
    }

    /// A pool that never connects; fine for paths that fail before the
    /// store lookup.
    fn unused_pool() -> PgPool {
        PgPool::connect_lazy("postgres://localhost/unused").unwrap()
    }

    #[tokio::test]
    async fn test_refresh_token_rejected_where_access_expected() {
        let codec = test_codec();
        let token = codec.issue_refresh(42).unwrap();

        let err = resolve_identity(&unused_pool(), &codec, &token, TokenKind::Access)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_access_token_rejected_where_refresh_expected() {
        let codec = test_codec();
        let token = codec.issue_access(42).unwrap();

        let err = resolve_identity(&unused_pool(), &codec, &token, TokenKind::Refresh)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let codec = test_codec();

        let err = resolve_identity(&unused_pool(), &codec, "garbage", TokenKind::Access)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated));
    }
}
