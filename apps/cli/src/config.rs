//! # Configuration
//!
//! Startup settings for the menu binary.
//!
//! The data file location is fixed: `inventario.db` in the working
//! directory. There are no flags and no environment override for it.
//! Only the log filter honours `RUST_LOG` (see [`crate::init_tracing`]).

use inventario_db::DbConfig;
use std::path::PathBuf;

/// Data file used by the menu.
pub const DEFAULT_DATABASE_FILE: &str = "inventario.db";

/// Log filter applied when `RUST_LOG` is unset.
///
/// Quiet by default so log lines don't interleave with the menu.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite data file.
    pub database_path: PathBuf,

    /// Fallback `EnvFilter` directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Database settings for the menu.
    ///
    /// Schema creation is left to the dispatcher, which runs it once on entry.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path).run_migrations(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.database_path, PathBuf::from("inventario.db"));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_db_config_defers_schema() {
        let db_config = AppConfig::default().db_config();
        assert_eq!(db_config.database_path, PathBuf::from("inventario.db"));
        assert_eq!(db_config.max_connections, 1);
        assert!(!db_config.run_migrations);
    }
}
