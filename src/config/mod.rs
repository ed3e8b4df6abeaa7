//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/trail-watch/config.toml
//!
//! Environment variables take precedence over the file:
//! `API_BASE_URL`, `MAPS_PROVIDER_API_KEY`, `ADMIN_TOKEN`.

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hazard API settings (client side)
    #[serde(default)]
    pub api: ApiConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Place resolution settings
    #[serde(default)]
    pub places: PlacesConfig,

    /// Share link settings
    #[serde(default)]
    pub share: ShareConfig,
}

/// Hazard API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for hazard queries
    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    /// Bearer token for admin write endpoints
    #[serde(default)]
    pub admin_token: String,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the JSON hazard store file
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Directory of static frontend assets served at `/`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Place resolution settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlacesConfig {
    /// Maps provider API key; when empty, the resolver runs in fallback
    /// mode against the built-in landmark catalog
    #[serde(default)]
    pub provider_api_key: String,
}

/// Share link settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShareConfig {
    /// Public origin used for share URLs (e.g. "https://trailwatch.example");
    /// when empty, share URLs fall back to the path-only form
    #[serde(default)]
    pub public_origin: String,
}

// Default value functions for serde
fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_store_file() -> String {
    DEFAULT_STORE_FILE.to_string()
}
fn default_static_dir() -> String {
    DEFAULT_STATIC_DIR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            server: ServerConfig::default(),
            places: PlacesConfig::default(),
            share: ShareConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            admin_token: String::new(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            store_file: default_store_file(),
            static_dir: default_static_dir(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist. Environment overrides
    /// are applied after the file is read.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let mut config: Config = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?
        } else {
            let config = Config::default();
            config.save()?;
            config
        };

        config.apply_env();
        Ok(config)
    }

    /// Apply recognized environment variable overrides
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("API_BASE_URL") {
            if !url.is_empty() {
                self.api.base_url = url;
            }
        }
        if let Ok(key) = std::env::var("MAPS_PROVIDER_API_KEY") {
            self.places.provider_api_key = key;
        }
        if let Ok(token) = std::env::var("ADMIN_TOKEN") {
            self.api.admin_token = token;
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "base_url"] => Some(self.api.base_url.clone()),
            ["api", "admin_token"] => Some(self.api.admin_token.clone()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),
            ["server", "store_file"] => Some(self.server.store_file.clone()),
            ["server", "static_dir"] => Some(self.server.static_dir.clone()),

            ["places", "provider_api_key"] => Some(self.places.provider_api_key.clone()),

            ["share", "public_origin"] => Some(self.share.public_origin.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "base_url"] => {
                self.api.base_url = value.to_string();
            }
            ["api", "admin_token"] => {
                self.api.admin_token = value.to_string();
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid port value: {}", value)))?;
            }
            ["server", "store_file"] => {
                self.server.store_file = value.to_string();
            }
            ["server", "static_dir"] => {
                self.server.static_dir = value.to_string();
            }

            ["places", "provider_api_key"] => {
                self.places.provider_api_key = value.to_string();
            }

            ["share", "public_origin"] => {
                self.share.public_origin = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "api.base_url",
            "api.admin_token",
            "server.host",
            "server.port",
            "server.store_file",
            "server.static_dir",
            "places.provider_api_key",
            "share.public_origin",
        ]
    }

    /// True when a maps provider API key is configured
    pub fn provider_configured(&self) -> bool {
        !self.places.provider_api_key.is_empty()
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.server.port, 8000);
        assert!(config.places.provider_api_key.is_empty());
        assert!(!config.provider_configured());
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(
            config.get("api.base_url"),
            Some("http://localhost:8000".to_string())
        );

        config.set("api.base_url", "http://hazards.local").unwrap();
        assert_eq!(
            config.get("api.base_url"),
            Some("http://hazards.local".to_string())
        );

        config.set("server.port", "9000").unwrap();
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        let result = config.set("invalid.key", "value");
        assert!(result.is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        let result = config.set("server.port", "not_a_number");
        assert!(result.is_err());
    }

    #[test]
    fn test_provider_configured() {
        let mut config = Config::default();
        assert!(!config.provider_configured());

        config.set("places.provider_api_key", "key-123").unwrap();
        assert!(config.provider_configured());
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.places.provider_api_key = "abc".to_string();
        config.share.public_origin = "https://trailwatch.example".to_string();

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(loaded.places.provider_api_key, "abc");
        assert_eq!(loaded.share.public_origin, "https://trailwatch.example");
        assert_eq!(loaded.server.port, 8000);
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        assert!(toml.contains("[api]"));
        assert!(toml.contains("[server]"));
        assert!(toml.contains("[places]"));
        assert!(toml.contains("[share]"));
    }

    #[test]
    fn test_server_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_available_keys() {
        let keys = Config::available_keys();
        assert!(keys.contains(&"api.base_url"));
        assert!(keys.contains(&"server.port"));
        assert!(keys.contains(&"places.provider_api_key"));
    }
}
