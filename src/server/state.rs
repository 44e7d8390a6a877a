//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through Axum's
//! state extraction. Both fields are cheap to clone: the database connection is a pool
//! handle and the admin allow-list sits behind an `Arc`.

use sea_orm::DatabaseConnection;

use super::service::admin::AdminService;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Platform IDs allowed to cancel any booking.
    pub admins: AdminService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `admins` - Administrator allow-list
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, admins: AdminService) -> Self {
        Self { db, admins }
    }
}
