//! Authentication test helpers
//!
//! Provides utilities for creating test users, a fixed-secret token codec,
//! and application state for calling handlers directly.

use jsonwebtoken::Algorithm;
use sqlx::PgPool;

use notably::auth::password;
use notably::auth::tokens::TokenCodec;
use notably::auth::users::{self, User};
use notably::server::config::AuthConfig;
use notably::server::state::AppState;

/// Auth configuration used by every test
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        secret: "integration-test-secret".to_string(),
        algorithm: Algorithm::HS256,
        access_token_minutes: 15,
        refresh_token_days: 7,
    }
}

/// Token codec with the fixed test secret
pub fn test_codec() -> TokenCodec {
    TokenCodec::new(&test_auth_config())
}

/// Application state for calling handlers directly
pub fn test_state(pool: &PgPool) -> AppState {
    AppState {
        db: pool.clone(),
        tokens: test_codec(),
    }
}

/// Create a test user in the database
pub async fn create_test_user(pool: &PgPool, email: &str, password: &str) -> User {
    let password_hash = password::hash(password).expect("Failed to hash test password");
    users::create_user(pool, "testuser", email, &password_hash)
        .await
        .expect("Failed to create test user")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
