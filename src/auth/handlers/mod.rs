//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the authentication and
//! account endpoints.
//!
//! # Handlers
//!
//! - **`signup`** - POST /user/signup - account creation
//! - **`login`** - POST /user/login - credential check, token pair issuance
//! - **`refresh`** - POST /user/refresh - new access token from a refresh token
//! - **`me`** - the /user/*/me account endpoints and password change
//!
//! # Security
//!
//! - Login failures render identically for unknown email and wrong password
//! - Refresh never returns a new refresh token
//! - Passwords are never logged or returned in responses

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Token refresh handler
pub mod refresh;

/// Current-account handlers
pub mod me;

// Re-export commonly used types
pub use types::{
    AccessTokenResponse, DetailResponse, LoginRequest, SignupRequest, TokenPairResponse,
    UserResponse,
};

// Re-export handlers
pub use login::login;
pub use me::{change_password, delete_me, edit_me, view_me};
pub use refresh::refresh;
pub use signup::signup;
