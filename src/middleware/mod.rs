//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - the access-token guard protecting non-auth routes

pub mod auth;

pub use auth::{bearer_token, require_access_token, CurrentUser};
