//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User registry
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Wire the SeaORM-backed registry from a database connection.
    pub fn from_database(database: &Database) -> Self {
        let user_repo = Arc::new(UserStore::new(database.get_connection()));
        Self::new(Arc::new(UserManager::new(user_repo)))
    }

    /// Create new application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}
