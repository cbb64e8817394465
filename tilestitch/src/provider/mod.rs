//! Upstream tile provider abstraction
//!
//! This module provides traits and implementations for fetching raster
//! tiles from an upstream XYZ tile endpoint.

mod http;
mod mapbox;
mod types;

pub use http::{AsyncHttpClient, AsyncReqwestClient};
pub use mapbox::{MapboxProvider, DEFAULT_BASE_URL};
pub use types::{ProviderError, TileProvider};

#[cfg(test)]
pub use http::tests::MockAsyncHttpClient;
