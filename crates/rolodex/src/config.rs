//! Configuration management for rolodex.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "rolodex";

/// Default record file name.
const CONTACTS_FILE_NAME: &str = "contacts.csv";

/// Default address the HTTP server binds to.
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";

/// Default port the HTTP server listens on.
const DEFAULT_PORT: u16 = 7040;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `ROLODEX_`)
/// 2. TOML config file at `~/.config/rolodex/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// HTTP server configuration.
    pub server: ServerConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the record file.
    /// Defaults to `~/.local/share/rolodex/contacts.csv`
    pub contacts_path: Option<PathBuf>,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the listener to.
    pub bind_address: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `ROLODEX_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("ROLODEX_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.server.bind_address.trim().is_empty() {
            return Err(Error::config_validation("bind_address must not be empty"));
        }

        if self.server.port == 0 {
            return Err(Error::config_validation("port must be greater than 0"));
        }

        Ok(())
    }

    /// Get the record file path, resolving defaults if not set.
    #[must_use]
    pub fn contacts_path(&self) -> PathBuf {
        self.storage
            .contacts_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(CONTACTS_FILE_NAME))
    }

    /// Get the address the HTTP listener binds to, as `host:port`.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.storage.contacts_path.is_none());
        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.server.port, 7040);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("port"));
    }

    #[test]
    fn test_validate_empty_bind_address() {
        let mut config = Config::default();
        config.server.bind_address = "  ".to_string();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("bind_address"));
    }

    #[test]
    fn test_contacts_path_default() {
        let config = Config::default();
        let path = config.contacts_path();

        assert!(path.to_string_lossy().contains("contacts.csv"));
        assert!(path.to_string_lossy().contains("rolodex"));
    }

    #[test]
    fn test_contacts_path_custom() {
        let mut config = Config::default();
        config.storage.contacts_path = Some(PathBuf::from("/custom/contacts.csv"));

        assert_eq!(config.contacts_path(), PathBuf::from("/custom/contacts.csv"));
    }

    #[test]
    fn test_listen_addr() {
        let config = Config::default();
        assert_eq!(config.listen_addr(), "127.0.0.1:7040");
    }

    #[test]
    fn test_listen_addr_custom() {
        let mut config = Config::default();
        config.server.bind_address = "0.0.0.0".to_string();
        config.server.port = 8080;

        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("rolodex"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_default_data_dir() {
        let path = Config::default_data_dir();
        assert!(path.to_string_lossy().contains("rolodex"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "[server]\nport = 9000\n\n[storage]\ncontacts_path = \"/tmp/book.csv\"\n",
        )
        .unwrap();

        let config = Config::load_from(Some(config_file)).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(
            config.storage.contacts_path,
            Some(PathBuf::from("/tmp/book.csv"))
        );
        // Untouched values keep their defaults
        assert_eq!(config.server.bind_address, "127.0.0.1");
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("config.toml");
        std::fs::write(&config_file, "[server]\nport = 0\n").unwrap();

        let result = Config::load_from(Some(config_file));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("bind_address"));
        assert!(json.contains("contacts_path"));
    }

    #[test]
    fn test_server_config_deserialize() {
        let json = r#"{"bind_address": "0.0.0.0", "port": 8080}"#;
        let server: ServerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(server.bind_address, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
