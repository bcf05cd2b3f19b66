//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Architecture
//!
//! - **`router`** - main router creation: public + guarded groups, CORS,
//!   state attachment
//! - **`api_routes`** - the route lists themselves and the root banner
//!
//! # Route Organization
//!
//! Routes fall into two groups:
//!
//! 1. **Public** - `/`, `/user/signup`, `/user/login`, `/user/refresh`
//!    (refresh does its own refresh-kind token check)
//! 2. **Protected** - everything else, behind the access-token guard

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
