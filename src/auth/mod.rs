//! Authentication Module
//!
//! This module handles user authentication, registration, and account
//! management. It contains the security-critical core of the service:
//! password hashing, the token codec/issuer, and the identity resolver that
//! every protected route depends on.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`tokens`** - token kinds, claims, and the signing codec/issuer
//! - **`resolver`** - turning a presented token into a verified user
//! - **`users`** - user row type and database operations
//! - **`handlers`** - HTTP handlers for the auth and account endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: user provides username/email/password → user created
//! 2. **Login**: credentials verified → access + refresh token pair
//! 3. **Protected request**: access token resolved to a user by middleware
//! 4. **Refresh**: refresh token resolved → new access token minted
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are stateless: their kind and expiry live inside the signed
//!   string, nothing is stored server-side and nothing can be revoked early
//! - A token of one kind is never accepted where the other is expected
//! - All token failures collapse into one 401 (no information leakage)

/// HTTP handlers for authentication and account endpoints
pub mod handlers;

/// Password hashing and verification
pub mod password;

/// Identity resolution from bearer tokens
pub mod resolver;

/// Token kinds, claims, and the signing codec
pub mod tokens;

/// User data model and database operations
pub mod users;

// Re-export commonly used types
pub use resolver::resolve_identity;
pub use tokens::{Claims, TokenCodec, TokenKind};
pub use users::User;
