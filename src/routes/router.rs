/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines the
 * public and guarded route groups into a single Axum router.
 *
 * The guarded group is wrapped with the access-token middleware; the
 * public group (signup, login, refresh, banner) is not — refresh performs
 * its own refresh-kind resolution inside the handler.
 */

use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::middleware::auth::require_access_token;
use crate::routes::api_routes::{protected_routes, public_routes};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - application state (pool + token codec)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    let guarded = protected_routes().route_layer(middleware::from_fn_with_state(
        app_state.clone(),
        require_access_token,
    ));

    public_routes()
        .merge(guarded)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}
