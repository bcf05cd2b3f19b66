//! Notably - Main Library
//!
//! Notably is a multi-tenant note-taking backend built with Rust. It exposes
//! an Axum HTTP API for user accounts, notes, and note categories, with
//! first-party password login and a two-token (access/refresh) JWT scheme.
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`server`** - Configuration loading, application state, app assembly
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, token codec/issuer, identity resolution,
//!   and the account/authentication handlers
//! - **`middleware`** - The access-token guard protecting non-auth routes
//! - **`notes`** - Note CRUD handlers and database operations
//! - **`categories`** - Category CRUD handlers and database operations
//! - **`error`** - The API error type and its HTTP rendering
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email + password → user created with a default category
//! 2. **Login**: credentials verified → access + refresh token pair returned
//! 3. **Protected request**: access token verified → identity attached to
//!    the request → handler runs with the resolved user
//! 4. **Refresh**: refresh token verified → new access token returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are stateless signed JWTs carrying their own kind and expiry
//! - A refresh token is only ever good for minting a new access token
//! - Every token failure renders as the same 401 (no information leakage)

/// Password hashing, tokens, identity resolution, and auth handlers
pub mod auth;

/// Category CRUD handlers and database operations
pub mod categories;

/// API error types
pub mod error;

/// Middleware for request processing
pub mod middleware;

/// Note CRUD handlers and database operations
pub mod notes;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

// Re-export commonly used types
pub use error::ApiError;
pub use server::config::ServerConfig;
pub use server::init::create_app;
pub use server::state::AppState;
