//! Tilestitch - map tile proxy with low-zoom synthesis
//!
//! This library implements an HTTP tile proxy that, for two designated zoom
//! levels, synthesizes a tile by fetching the covering block of higher-zoom
//! tiles from an upstream provider, compositing them onto a canvas, and
//! downsampling the result to the standard 256×256 tile size. All other zoom
//! levels are proxied through unmodified.
//!
//! # High-Level API
//!
//! ```ignore
//! use tilestitch::provider::{AsyncReqwestClient, MapboxProvider};
//! use tilestitch::server::{serve, AppState};
//! use std::sync::Arc;
//!
//! let client = AsyncReqwestClient::new()?;
//! let provider = MapboxProvider::new(client, base_url, access_token);
//! let state = AppState::new(Arc::new(provider));
//! serve(state, 3000).await?;
//! ```

pub mod composite;
pub mod config;
pub mod coord;
pub mod logging;
pub mod provider;
pub mod server;

/// Version of the tilestitch library and CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
