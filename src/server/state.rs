//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Configured base for absolute URLs, without trailing slash.
    ///
    /// When `None`, URLs are built from the request's `Host` header.
    pub public_url: Option<String>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(db: DatabaseConnection, public_url: Option<String>) -> Self {
        Self { db, public_url }
    }
}
