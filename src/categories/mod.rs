//! Category Module
//!
//! Per-user note categories. Every user owns a default "Uncategorized"
//! category created at signup; it cannot be renamed or deleted, and notes
//! with no category are simply uncategorized (NULL) rather than members of
//! it.

/// Database operations for categories
pub mod db;

/// HTTP handlers for category endpoints
pub mod handlers;

/// Name of the category every account is seeded with
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

pub use db::Category;
