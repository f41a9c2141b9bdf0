//! Configuration for Concursos.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ConcursosResult;

/// Public Mega-Sena results API.
pub const DEFAULT_API_BASE_URL: &str = "https://loteriascaixa-api.herokuapp.com/api/megasena";

/// Main configuration for Concursos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Local store settings.
    #[serde(default)]
    pub store: StoreConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base endpoint; the draw number (or `latest`) is appended as a path segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Local store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Persist draws on disk. When disabled an in-memory store is used.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// SQLite database path.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            db_path: default_db_path(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_db_path() -> PathBuf {
    PathBuf::from(".concursos/concursos.db")
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConcursosResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConcursosResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            api: ApiConfig::default(),
            store: StoreConfig::default(),
        }
    }

    /// Tries to load configuration from current directory or uses default.
    pub fn load_or_default() -> Self {
        Self::load("concursos.toml").unwrap_or_else(|_| Self::default_config())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default_config();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.general.log_format, "text");
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert!(config.store.enabled);
        assert_eq!(config.store.db_path, PathBuf::from(".concursos/concursos.db"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "http://127.0.0.1:9000/api/megasena"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://127.0.0.1:9000/api/megasena");
        assert_eq!(config.general.log_level, "info");
        assert!(config.store.enabled);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("concursos.toml");

        let mut config = Config::default_config();
        config.store.db_path = PathBuf::from("/tmp/outro.db");
        config.general.log_format = "json".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.store.db_path, PathBuf::from("/tmp/outro.db"));
        assert_eq!(loaded.general.log_format, "json");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(Config::load(dir.path().join("nao-existe.toml")).is_err());
    }
}
