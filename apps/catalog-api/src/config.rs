//! Catalog API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use catalog_db::DbConfig;

/// Catalog API configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Pool size
    pub db_max_connections: u32,

    /// How long a writer waits for SQLite's write lock
    pub db_busy_timeout: Duration,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// ```rust,ignore
    /// let config = ApiConfig::load_from(|key| match key {
    ///     "CATALOG_BIND_ADDR" => Some("0.0.0.0:9000".to_string()),
    ///     _ => None,
    /// })?;
    /// ```
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let config = ApiConfig {
            bind_addr: var("CATALOG_BIND_ADDR", "127.0.0.1:8000")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CATALOG_BIND_ADDR".to_string()))?,

            database_path: PathBuf::from(var("CATALOG_DATABASE_PATH", "./data.db")),

            db_max_connections: var("CATALOG_DB_MAX_CONNECTIONS", "5")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CATALOG_DB_MAX_CONNECTIONS".to_string()))?,

            db_busy_timeout: var("CATALOG_DB_BUSY_TIMEOUT_MS", "5000")
                .parse()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidValue("CATALOG_DB_BUSY_TIMEOUT_MS".to_string()))?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "CATALOG_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        if config.database_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingRequired(
                "CATALOG_DATABASE_PATH".to_string(),
            ));
        }

        Ok(config)
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
            .max_connections(self.db_max_connections)
            .busy_timeout(self.db_busy_timeout)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::load_from(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8000".parse().unwrap());
        assert_eq!(config.database_path, PathBuf::from("./data.db"));
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.db_busy_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("CATALOG_BIND_ADDR", "0.0.0.0:9000"),
            ("CATALOG_DATABASE_PATH", "/var/lib/catalog/items.db"),
            ("CATALOG_DB_MAX_CONNECTIONS", "12"),
            ("CATALOG_DB_BUSY_TIMEOUT_MS", "250"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.db_max_connections, 12);

        let db = config.db_config();
        assert_eq!(db.database_path, PathBuf::from("/var/lib/catalog/items.db"));
        assert_eq!(db.max_connections, 12);
        assert_eq!(db.busy_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("CATALOG_BIND_ADDR", "not-an-addr")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for CATALOG_BIND_ADDR");

        assert!(matches!(
            load(&[("CATALOG_DB_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            load(&[("CATALOG_DB_BUSY_TIMEOUT_MS", "-1")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            load(&[("CATALOG_DATABASE_PATH", "")]),
            Err(ConfigError::MissingRequired(_))
        ));
    }
}
