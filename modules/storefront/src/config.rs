//! Configuration for the storefront store
//!
//! Layered with figment: built-in defaults, then an optional YAML file, then
//! `STOREFRONT__`-prefixed environment variables.

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// About 136 years
const PINNED_CONNECTION_LIFETIME_SECS: u64 = u32::MAX as u64;

/// Storefront store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database DSN (`postgres://...` or `sqlite:...`)
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Upper bound of the connection pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connections kept open while idle
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Seconds to wait for a connection
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Apply pending migrations during init
    #[serde(default = "default_true")]
    pub run_migrations: bool,

    /// Let sqlx log every statement
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout_secs(),
            run_migrations: true,
            sqlx_logging: false,
        }
    }
}

impl Config {
    /// Load configuration, optionally overlaying a YAML file
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed("STOREFRONT__").split("__"))
            .extract()
    }

    /// Configuration for a private in-memory SQLite database
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            ..Self::default()
        }
    }

    /// An in-memory SQLite database lives inside a single connection
    pub fn is_in_memory(&self) -> bool {
        self.database_url.starts_with("sqlite:") && self.database_url.contains(":memory:")
    }

    pub fn pool_bounds(&self) -> (u32, u32) {
        if self.is_in_memory() {
            return (1, 1);
        }
        let max = self.max_connections.max(1);
        (self.min_connections.min(max), max)
    }

    /// Lifetime and idle limit for pooled connections
    ///
    /// Recycling the connection of an in-memory database would replace it with an
    /// empty one, so that connection is kept for as long as the pool lives.
    pub fn pinned_connection_lifetime(&self) -> Option<Duration> {
        self.is_in_memory()
            .then(|| Duration::from_secs(PINNED_CONNECTION_LIFETIME_SECS))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn default_database_url() -> String {
    "postgres://localhost/storefront".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout_secs() -> u64 {
    8
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "database_url: sqlite:///tmp/shop.db\nmax_connections: 4").unwrap();

        let cfg = Config::load(Some(file.path())).unwrap();
        assert_eq!(cfg.database_url, "sqlite:///tmp/shop.db");
        assert_eq!(cfg.max_connections, 4);
        assert_eq!(cfg.min_connections, default_min_connections());
        assert!(cfg.run_migrations);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "database: nope").unwrap();

        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn in_memory_sqlite_is_pinned_to_one_connection() {
        let cfg = Config {
            max_connections: 8,
            min_connections: 2,
            ..Config::in_memory()
        };
        assert_eq!(cfg.pool_bounds(), (1, 1));
    }

    #[test]
    fn only_in_memory_connections_outlive_the_pool_defaults() {
        let lifetime = Config::in_memory().pinned_connection_lifetime();
        assert!(lifetime.is_some_and(|d| d >= Duration::from_secs(365 * 24 * 3600)));

        assert_eq!(Config::default().pinned_connection_lifetime(), None);
        let file_backed = Config {
            database_url: "sqlite:///tmp/shop.db".to_string(),
            ..Config::default()
        };
        assert_eq!(file_backed.pinned_connection_lifetime(), None);
    }

    #[test]
    fn min_connections_never_exceed_max() {
        let cfg = Config {
            max_connections: 2,
            min_connections: 5,
            ..Config::default()
        };
        assert_eq!(cfg.pool_bounds(), (2, 2));
    }
}
