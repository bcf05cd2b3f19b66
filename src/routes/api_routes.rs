/**
 * API Route Wiring
 *
 * This module defines the route tables for the service.
 *
 * # Routes
 *
 * ## Public
 * - `GET  /`                - service banner with a database probe
 * - `POST /user/signup`     - account creation
 * - `POST /user/login`      - credential check, token pair issuance
 * - `POST /user/refresh`    - new access token from a refresh token
 *
 * ## Protected (access token required)
 * - `GET    /user/view/me`
 * - `PUT    /user/edit/me`
 * - `PUT    /user/change-password`
 * - `DELETE /user/delete/me`
 * - `POST   /notes/create`
 * - `GET    /notes/all` | `/notes/uncategorized` | `/notes/bookmarks`
 * - `GET    /notes/{note_id}`
 * - `PUT    /notes/edit/{note_id}` | `/notes/bookmark/{note_id}`
 * - `PUT    /notes/category/{note_id}/{category_id}`
 * - `DELETE /notes/delete/{note_id}`
 * - `POST   /category/create`
 * - `GET    /category/all` | `/category/{category_id}`
 * - `PUT    /category/edit/{category_id}`
 * - `DELETE /category/delete/{category_id}`
 */

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Json, Router,
};
use sqlx::PgPool;

use crate::auth::handlers::{change_password, delete_me, edit_me, login, refresh, signup, view_me};
use crate::categories::handlers as category_handlers;
use crate::notes::handlers as note_handlers;
use crate::server::state::AppState;

/// Routes reachable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .route("/user/signup", post(signup))
        .route("/user/login", post(login))
        .route("/user/refresh", post(refresh))
}

/// Routes requiring a resolved access token
///
/// The guard itself is layered on in `router.rs`.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        // Account
        .route("/user/view/me", get(view_me))
        .route("/user/edit/me", put(edit_me))
        .route("/user/change-password", put(change_password))
        .route("/user/delete/me", delete(delete_me))
        // Notes
        .route("/notes/create", post(note_handlers::create_note))
        .route("/notes/all", get(note_handlers::get_all_notes))
        .route("/notes/uncategorized", get(note_handlers::get_uncategorized))
        .route("/notes/bookmarks", get(note_handlers::get_bookmarks))
        .route("/notes/{note_id}", get(note_handlers::get_note))
        .route("/notes/edit/{note_id}", put(note_handlers::edit_note))
        .route("/notes/delete/{note_id}", delete(note_handlers::delete_note))
        .route(
            "/notes/bookmark/{note_id}",
            put(note_handlers::toggle_bookmark),
        )
        .route(
            "/notes/category/{note_id}/{category_id}",
            put(note_handlers::categorize),
        )
        // Categories
        .route("/category/create", post(category_handlers::create_category))
        .route("/category/all", get(category_handlers::get_categories))
        .route(
            "/category/{category_id}",
            get(category_handlers::get_category_notes),
        )
        .route(
            "/category/edit/{category_id}",
            put(category_handlers::edit_category),
        )
        .route(
            "/category/delete/{category_id}",
            delete(category_handlers::delete_category),
        )
}

/// Service banner with a database connectivity probe
async fn service_info(State(pool): State<PgPool>) -> Json<serde_json::Value> {
    let database_status = match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(&pool).await {
        Ok(_) => "Connected".to_string(),
        Err(e) => format!("Error: {e}"),
    };

    Json(serde_json::json!({
        "name": "Notably API",
        "version": env!("CARGO_PKG_VERSION"),
        "database_status": database_status,
        "status": "Note API is up and running",
    }))
}
