/**
 * Token Codec and Issuer
 *
 * This module handles JWT generation and validation for the two-token
 * authentication scheme. Tokens are stateless: the claims (subject id,
 * expiry, kind) live entirely inside the signed string held by the client,
 * so no session table exists and nothing can be revoked before expiry.
 *
 * # Token Kinds
 *
 * - `Access` - short-lived, authorizes ordinary operations
 * - `Refresh` - long-lived, authorizes only minting a new access token
 *
 * The kind is an explicit claim, not an inference from lifetimes: a stolen
 * refresh token must never satisfy an access check and vice versa.
 *
 * # Error Opacity
 *
 * `decode` collapses every failure (bad signature, structural corruption,
 * expiry) into one opaque `InvalidToken`. Callers cannot tell an expired
 * token from a forged one, which closes an oracle distinguishing the two.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::server::config::AuthConfig;

/// Discriminator preventing cross-use of access and refresh tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// The decoded payload of a token
///
/// Transient and unpersisted: created at issuance, reconstructed at decode,
/// never stored anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user id
    pub user_id: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Access or refresh
    pub token_kind: TokenKind,
}

/// Opaque token rejection
///
/// Deliberately carries no detail about which check failed.
#[derive(Debug, Error)]
#[error("invalid token")]
pub struct InvalidToken;

/// Signs and verifies tokens with a fixed key, algorithm, and lifetimes
///
/// Built once at startup from `AuthConfig` and shared read-only by every
/// request. Changing the secret invalidates all outstanding tokens.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

impl TokenCodec {
    /// Build a codec from the auth configuration
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(config.algorithm);
        // Exact expiry: a token is rejected the moment its exp passes.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            algorithm: config.algorithm,
            validation,
            access_lifetime: Duration::minutes(config.access_token_minutes),
            refresh_lifetime: Duration::days(config.refresh_token_days),
        }
    }

    /// Issue a short-lived access token for a user
    pub fn issue_access(&self, user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue(user_id, TokenKind::Access, self.access_lifetime)
    }

    /// Issue a long-lived refresh token for a user
    pub fn issue_refresh(&self, user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue(user_id, TokenKind::Refresh, self.refresh_lifetime)
    }

    fn issue(
        &self,
        user_id: i64,
        token_kind: TokenKind,
        lifetime: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            user_id,
            exp: (Utc::now() + lifetime).timestamp(),
            token_kind,
        };
        self.encode(&claims)
    }

    /// Sign a claims value into a compact token string
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&Header::new(self.algorithm), claims, &self.encoding)
    }

    /// Verify a token string and recover its claims
    ///
    /// Checks the signature against the configured key/algorithm and the
    /// embedded expiry against current time. Any failure yields the same
    /// opaque `InvalidToken`.
    pub fn decode(&self, token: &str) -> Result<Claims, InvalidToken> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(secret: &str) -> AuthConfig {
        AuthConfig {
            secret: secret.to_string(),
            algorithm: Algorithm::HS256,
            access_token_minutes: 15,
            refresh_token_days: 7,
        }
    }

    fn test_codec() -> TokenCodec {
        TokenCodec::new(&test_config("test-secret"))
    }

    #[test]
    fn test_access_token_roundtrip() {
        let codec = test_codec();
        let token = codec.issue_access(42).unwrap();

        let claims = codec.decode(&token).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.token_kind, TokenKind::Access);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_refresh_token_carries_its_kind() {
        let codec = test_codec();
        let token = codec.issue_refresh(42).unwrap();

        let claims = codec.decode(&token).unwrap();
        assert_eq!(claims.token_kind, TokenKind::Refresh);
    }

    #[test]
    fn test_refresh_outlives_access() {
        let codec = test_codec();
        let access = codec.decode(&codec.issue_access(1).unwrap()).unwrap();
        let refresh = codec.decode(&codec.issue_refresh(1).unwrap()).unwrap();
        assert!(refresh.exp > access.exp);
    }

    #[test]
    fn test_expired_token_rejected() {
        let codec = test_codec();
        // A 15-minute token, 16 minutes later.
        let claims = Claims {
            user_id: 42,
            exp: (Utc::now() - Duration::minutes(1)).timestamp(),
            token_kind: TokenKind::Access,
        };
        let token = codec.encode(&claims).unwrap();

        assert!(codec.decode(&token).is_err());
    }

    #[test]
    fn test_rekeyed_codec_rejects_old_tokens() {
        let codec = test_codec();
        let token = codec.issue_access(42).unwrap();

        let rekeyed = TokenCodec::new(&test_config("rotated-secret"));
        assert!(rekeyed.decode(&token).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        let codec = test_codec();
        assert!(codec.decode("not.a.token").is_err());
        assert!(codec.decode("").is_err());
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let codec = test_codec();
        let token = codec.issue_access(42).unwrap();

        // Flip a character in the payload segment.
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let mut payload: Vec<u8> = parts[1].clone().into_bytes();
        payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
        parts[1] = String::from_utf8(payload).unwrap();

        assert!(codec.decode(&parts.join(".")).is_err());
    }
}
