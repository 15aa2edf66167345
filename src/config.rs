//! Environment-driven configuration for the binary entry point.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the database file.
pub const DB_ENV: &str = "TRANSFERQ_DB";

/// Settings the binary resolves before opening the gateway.
///
/// The core itself takes an already-open [`crate::persist::RowStore`] and
/// reads no configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path of the SQLite database file.
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("transferq.db"),
        }
    }
}

impl Config {
    /// Reads configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = env::var(DB_ENV) {
            if !path.is_empty() {
                config.database_path = PathBuf::from(path);
            }
        }
        config
    }
}
