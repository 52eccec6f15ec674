//! Server configuration and environment variable handling.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Errors reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Port is not a number in range
    #[error("VRIDGE_PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),

    /// Flag is not a boolean
    #[error("{var} must be true/false/1/0, got '{value}'")]
    InvalidFlag {
        /// Variable name
        var: &'static str,
        /// Rejected value
        value: String,
    },

    /// Host and port do not form a socket address
    #[error("invalid bind address '{0}'")]
    InvalidAddr(String),
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Include internal error details in 500 responses
    pub dev_mode: bool,
    /// Directory for stored schedules; persistence is off when unset
    pub storage_dir: Option<PathBuf>,
    /// TOML duration table replacing the built-in one
    pub tables_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            dev_mode: false,
            storage_dir: None,
            tables_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `VRIDGE_HOST` (optional, default: 0.0.0.0)
    /// - `VRIDGE_PORT` (optional, default: 8080)
    /// - `VRIDGE_DEV_MODE` (optional, default: false)
    /// - `VRIDGE_STORAGE_DIR` (optional): enables schedule persistence
    /// - `VRIDGE_TABLES` (optional): TOML duration table
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("VRIDGE_HOST")
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.host);
        let port = match lookup("VRIDGE_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let dev_mode = match lookup("VRIDGE_DEV_MODE") {
            Some(raw) => parse_flag("VRIDGE_DEV_MODE", &raw)?,
            None => defaults.dev_mode,
        };
        let storage_dir = lookup("VRIDGE_STORAGE_DIR")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        let tables_path = lookup("VRIDGE_TABLES")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            dev_mode,
            storage_dir,
            tables_path,
        })
    }

    /// Socket address to bind.
    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddr(raw))
    }
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("VRIDGE_HOST", "127.0.0.1"),
            ("VRIDGE_PORT", "3001"),
            ("VRIDGE_DEV_MODE", "true"),
            ("VRIDGE_STORAGE_DIR", "/var/lib/vridge"),
        ]))
        .unwrap();

        assert_eq!(config.addr().unwrap().to_string(), "127.0.0.1:3001");
        assert!(config.dev_mode);
        assert_eq!(config.storage_dir, Some(PathBuf::from("/var/lib/vridge")));
        assert_eq!(config.tables_path, None);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[("VRIDGE_PORT", "http")])),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[("VRIDGE_DEV_MODE", "maybe")])),
            Err(ConfigError::InvalidFlag { .. })
        ));
        let config = ServerConfig {
            host: "not a host".into(),
            ..Default::default()
        };
        assert!(config.addr().is_err());
    }
}
