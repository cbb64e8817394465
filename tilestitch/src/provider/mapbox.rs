//! Mapbox raster tile provider.
//!
//! Fetches tiles from a Mapbox-style XYZ endpoint. Requires an access token
//! (free tier available with usage limits).
//!
//! # URL Pattern
//!
//! `{base}/{z}/{x}/{y}?access_token={token}`
//!
//! The base URL is constructor configuration rather than a constant so that
//! tests (and deployments pointing at a custom style) can substitute their
//! own endpoint.

use crate::provider::{AsyncHttpClient, ProviderError, TileProvider};

/// Default base URL: Mapbox satellite raster style at 256 px tiles.
pub const DEFAULT_BASE_URL: &str =
    "https://api.mapbox.com/styles/v1/mapbox/satellite-streets-v12/tiles/256";

/// Mapbox raster tile provider.
///
/// # Example
///
/// ```ignore
/// use tilestitch::provider::{AsyncReqwestClient, MapboxProvider, DEFAULT_BASE_URL};
///
/// let client = AsyncReqwestClient::new()?;
/// let provider = MapboxProvider::new(client, DEFAULT_BASE_URL, "your_access_token");
/// ```
pub struct MapboxProvider<C: AsyncHttpClient> {
    http_client: C,
    base_url: String,
    access_token: String,
}

impl<C: AsyncHttpClient> MapboxProvider<C> {
    /// Creates a new Mapbox provider against the given endpoint.
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client for making requests
    /// * `base_url` - Tile endpoint base URL, without trailing slash
    /// * `access_token` - Mapbox access token
    pub fn new(
        http_client: C,
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Builds the tile URL for the given address.
    fn build_url(&self, zoom: u8, x: u32, y: u32) -> String {
        format!(
            "{}/{}/{}/{}?access_token={}",
            self.base_url, zoom, x, y, self.access_token
        )
    }
}

impl<C: AsyncHttpClient> TileProvider for MapboxProvider<C> {
    async fn fetch_tile(&self, zoom: u8, x: u32, y: u32) -> Result<Vec<u8>, ProviderError> {
        let url = self.build_url(zoom, x, y);
        self.http_client.get(&url).await
    }

    fn name(&self) -> &str {
        "mapbox"
    }
}
