//! Configuration for the tile proxy.
//!
//! All tunables live in an INI file loaded once at startup; components take
//! their configuration explicitly at construction time rather than reading
//! ambient globals, so tests can substitute a fake upstream endpoint.

mod file;
mod settings;

pub use file::{config_directory, default_config_path, ConfigFileError};
pub use settings::{
    DownloadSettings, ProxyConfig, ServerSettings, UpstreamSettings, DEFAULT_PORT,
    DEFAULT_TIMEOUT_SECS,
};
