/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * Both fields are immutable from the handlers' point of view: `PgPool` is
 * internally synchronized and cheap to clone, and `TokenCodec` is built once
 * at startup and only ever read. No locking is needed anywhere in the
 * request path.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::tokens::TokenCodec;

/// Application state shared by all request handlers
///
/// # Fields
///
/// * `db` - PostgreSQL connection pool (the credential and record store)
/// * `tokens` - token codec/issuer built from the auth configuration
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Token codec and issuer
    pub tokens: TokenCodec,
}

/// Allow handlers to extract the pool directly via `State(PgPool)`
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

/// Allow handlers to extract the codec directly via `State(TokenCodec)`
impl FromRef<AppState> for TokenCodec {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
