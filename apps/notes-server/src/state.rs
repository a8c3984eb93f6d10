//! Application state.

use std::sync::Arc;

use note_store::NoteStore;

use crate::config::Config;

/// Shared application state.
pub struct AppState {
    /// Server configuration.
    pub config: Config,
    /// Note store.
    pub store: NoteStore,
}

impl AppState {
    /// Creates new application state.
    pub fn new(config: Config, store: NoteStore) -> Self {
        Self { config, store }
    }
}

/// Type alias for shared state.
pub type SharedState = Arc<AppState>;

/// Creates shared state from config and store.
pub fn create_shared_state(config: Config, store: NoteStore) -> SharedState {
    Arc::new(AppState::new(config, store))
}
