//! Application state.

use std::sync::Arc;

use tokio::sync::RwLock;
use user_directory::UserDirectory;

use crate::config::Config;

/// Shared application state.
pub struct AppState {
    /// Server configuration.
    pub config: Config,
    /// User directory. A single lock serializes mutations so the
    /// uniqueness scan and id assignment cannot interleave.
    pub directory: RwLock<UserDirectory>,
}

impl AppState {
    /// Creates new application state.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            directory: RwLock::new(UserDirectory::new()),
        }
    }
}

/// Type alias for shared state.
pub type SharedState = Arc<AppState>;

/// Creates shared state from config.
pub fn create_shared_state(config: Config) -> SharedState {
    Arc::new(AppState::new(config))
}
