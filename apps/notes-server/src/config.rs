//! Server configuration.

use std::env;

/// Notes service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application name reported by the API documentation.
    pub app_name: String,
    /// Application version reported by the API documentation.
    pub app_version: String,
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database connection string.
    pub database_url: String,
    /// Mount path of the interactive API docs page.
    pub docs_path: String,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            app_name: env::var("NOTES_APP_NAME").unwrap_or_else(|_| "Notes API".to_string()),
            app_version: env::var("NOTES_APP_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            host: env::var("NOTES_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("NOTES_SERVER_PORT")
                .unwrap_or_else(|_| "8001".to_string())
                .parse()
                .unwrap_or(8001),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:notes.db?mode=rwc".to_string()),
            docs_path: env::var("NOTES_DOCS_PATH").unwrap_or_else(|_| "/scalar".to_string()),
            log_level: env::var("NOTES_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
