//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing logic.

use crate::provider::DEFAULT_BASE_URL;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default HTTP timeout in seconds for upstream fetches.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Complete proxy configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Server settings
    pub server: ServerSettings,
    /// Upstream tile endpoint settings
    pub upstream: UpstreamSettings,
    /// Download settings
    pub download: DownloadSettings,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Listen port
    pub port: u16,
}

/// Upstream tile endpoint configuration.
#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    /// Tile endpoint base URL, without trailing slash
    pub base_url: String,
    /// Access token appended to every tile request
    pub access_token: Option<String>,
}

/// Download configuration.
#[derive(Debug, Clone)]
pub struct DownloadSettings {
    /// Timeout in seconds for HTTP requests.
    pub timeout: u64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings { port: DEFAULT_PORT },
            upstream: UpstreamSettings {
                base_url: DEFAULT_BASE_URL.to_string(),
                access_token: None,
            },
            download: DownloadSettings {
                timeout: DEFAULT_TIMEOUT_SECS,
            },
        }
    }
}
