//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so the client starts with zero configuration.

use std::path::PathBuf;

/// Where collections are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// SQLite file on disk.
    Sqlite,
    /// Process-local map, lost on exit.
    Memory,
}

impl std::str::FromStr for StorageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown storage mode: {other}")),
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Storage medium.
    /// Env: `AERVIX_STORAGE` (`sqlite` | `memory`)
    /// Default: `sqlite`
    pub storage: StorageMode,

    /// Explicit database file for [`StorageMode::Sqlite`].
    /// Env: `AERVIX_DB_PATH`
    /// Default: platform data directory.
    pub db_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            storage: StorageMode::Sqlite,
            db_path: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(mode) = lookup("AERVIX_STORAGE") {
            match mode.parse::<StorageMode>() {
                Ok(parsed) => config.storage = parsed,
                Err(e) => tracing::warn!(value = %mode, error = %e, "Invalid AERVIX_STORAGE, using default"),
            }
        }

        if let Some(path) = lookup("AERVIX_DB_PATH") {
            if !path.trim().is_empty() {
                config.db_path = Some(PathBuf::from(path));
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter.

        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config.storage, StorageMode::Sqlite);
        assert!(config.db_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("AERVIX_STORAGE", "Memory"),
            ("AERVIX_DB_PATH", "/tmp/club.db"),
        ]));
        assert_eq!(config.storage, StorageMode::Memory);
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/club.db")));
    }

    #[test]
    fn test_invalid_mode_keeps_default() {
        let config = ClientConfig::from_lookup(lookup(&[("AERVIX_STORAGE", "redis")]));
        assert_eq!(config.storage, StorageMode::Sqlite);
    }
}
