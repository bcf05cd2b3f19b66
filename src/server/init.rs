/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum application: database
 * connection, migrations, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect the PostgreSQL pool from `DATABASE_URL`
 * 2. Run pending migrations from `migrations/`
 * 3. Build the token codec from the auth configuration
 * 4. Assemble the router with all routes and middleware
 *
 * Unlike services that can degrade gracefully, this one cannot do anything
 * useful without its store, so a failed connection or migration aborts
 * startup.
 */

use axum::Router;
use sqlx::PgPool;
use thiserror::Error;

use crate::auth::tokens::TokenCodec;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Errors that abort server startup
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - server configuration loaded from the environment
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: &ServerConfig) -> Result<Router, StartupError> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    let app_state = AppState {
        db: pool,
        tokens: TokenCodec::new(&config.auth),
    };

    Ok(create_router(app_state))
}
