//! Notes Module
//!
//! Per-user notes with optional categorization and a bookmark flag. A note
//! with a NULL category is "uncategorized"; deleting a category returns its
//! notes to that state.

/// Database operations for notes
pub mod db;

/// HTTP handlers for note endpoints
pub mod handlers;

pub use db::{Note, NoteSummary};
