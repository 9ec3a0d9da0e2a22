//! Application state - shared across all handlers.

use std::sync::Arc;

use pulse_core::ports::UserStore;
use pulse_core::service::PostService;
use pulse_infra::InMemoryUserStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub posts: PostService,
}

impl AppState {
    /// Build the application state with the in-memory store.
    pub fn new() -> Self {
        let users: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
        let posts = PostService::new(users.clone());

        tracing::info!("Application state initialized (in-memory store)");

        Self { users, posts }
    }
}
