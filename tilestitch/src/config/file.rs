//! Configuration file handling for ~/.tilestitch/config.ini.
//!
//! Loads user configuration with sensible defaults. Settings structs live
//! in [`super::settings`].

use super::settings::ProxyConfig;
use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

impl ProxyConfig {
    /// Load configuration from the default path (~/.tilestitch/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&default_config_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        Self::parse_ini(&ini)
    }

    /// Parse an `Ini` object, overlaying values found in the file onto the
    /// defaults.
    fn parse_ini(ini: &Ini) -> Result<Self, ConfigFileError> {
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("server")) {
            if let Some(v) = section.get("port") {
                config.server.port = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                    section: "server".to_string(),
                    key: "port".to_string(),
                    value: v.to_string(),
                    reason: "must be a port number (1-65535)".to_string(),
                })?;
            }
        }

        if let Some(section) = ini.section(Some("upstream")) {
            if let Some(v) = section.get("base_url") {
                let v = v.trim().trim_end_matches('/');
                if !v.is_empty() {
                    config.upstream.base_url = v.to_string();
                }
            }
            if let Some(v) = section.get("access_token") {
                let v = v.trim();
                if !v.is_empty() {
                    config.upstream.access_token = Some(v.to_string());
                }
            }
        }

        if let Some(section) = ini.section(Some("download")) {
            if let Some(v) = section.get("timeout") {
                config.download.timeout =
                    v.parse().map_err(|_| ConfigFileError::InvalidValue {
                        section: "download".to_string(),
                        key: "timeout".to_string(),
                        value: v.to_string(),
                        reason: "must be a positive integer (seconds)".to_string(),
                    })?;
            }
        }

        Ok(config)
    }
}

/// Get the path to the config directory (~/.tilestitch).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tilestitch")
}

/// Get the path to the config file (~/.tilestitch/config.ini).
pub fn default_config_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{DEFAULT_PORT, DEFAULT_TIMEOUT_SECS};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp config");
        file
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = ProxyConfig::load_from(Path::new("/nonexistent/config.ini")).unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.download.timeout, DEFAULT_TIMEOUT_SECS);
        assert!(config.upstream.access_token.is_none());
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            "[server]\n\
             port = 8080\n\
             \n\
             [upstream]\n\
             base_url = https://tiles.example.com/v1\n\
             access_token = pk.abc123\n\
             \n\
             [download]\n\
             timeout = 10\n",
        );

        let config = ProxyConfig::load_from(file.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.upstream.base_url, "https://tiles.example.com/v1");
        assert_eq!(config.upstream.access_token.as_deref(), Some("pk.abc123"));
        assert_eq!(config.download.timeout, 10);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let file = write_config("[upstream]\naccess_token = pk.partial\n");

        let config = ProxyConfig::load_from(file.path()).unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.download.timeout, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.upstream.access_token.as_deref(), Some("pk.partial"));
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let file = write_config("[upstream]\nbase_url = https://tiles.example.com/v1/\n");

        let config = ProxyConfig::load_from(file.path()).unwrap();
        assert_eq!(config.upstream.base_url, "https://tiles.example.com/v1");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let file = write_config("[server]\nport = not-a-port\n");

        let result = ProxyConfig::load_from(file.path());
        match result {
            Err(ConfigFileError::InvalidValue { section, key, .. }) => {
                assert_eq!(section, "server");
                assert_eq!(key, "port");
            }
            other => panic!("Expected InvalidValue, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let file = write_config("[download]\ntimeout = soon\n");

        let result = ProxyConfig::load_from(file.path());
        assert!(matches!(
            result,
            Err(ConfigFileError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_empty_token_treated_as_absent() {
        let file = write_config("[upstream]\naccess_token =  \n");

        let config = ProxyConfig::load_from(file.path()).unwrap();
        assert!(config.upstream.access_token.is_none());
    }

    #[test]
    fn test_default_paths() {
        assert!(default_config_path().ends_with(".tilestitch/config.ini"));
    }
}
