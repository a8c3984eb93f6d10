//! Server configuration.

use std::env;

/// Users service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application name reported by the API and its documentation.
    pub app_name: String,
    /// Application version reported by the API documentation.
    pub app_version: String,
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
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
            app_name: env::var("USERS_APP_NAME").unwrap_or_else(|_| "Users API".to_string()),
            app_version: env::var("USERS_APP_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            host: env::var("USERS_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("USERS_SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
            docs_path: env::var("USERS_DOCS_PATH").unwrap_or_else(|_| "/scalar".to_string()),
            log_level: env::var("USERS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_environment() {
        // SAFETY: Tests run serially or in isolation
        unsafe {
            env::remove_var("USERS_APP_NAME");
            env::remove_var("USERS_SERVER_PORT");
            env::remove_var("USERS_DOCS_PATH");
        }

        let config = Config::from_env();
        assert_eq!(config.app_name, "Users API");
        assert_eq!(config.port, 8000);
        assert_eq!(config.docs_path, "/scalar");
        assert_eq!(config.server_addr(), "0.0.0.0:8000");
    }
}
