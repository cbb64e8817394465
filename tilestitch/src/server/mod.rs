//! HTTP surface for the tile proxy.
//!
//! A single endpoint, `GET /tiles/:z/:x/:y`. Zoom levels 12 and 13 are
//! synthesized from zoom-14 upstream tiles; everything else is fetched
//! upstream and returned verbatim.

mod error;
mod handler;

pub use error::ProxyError;

use crate::provider::TileProvider;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Upstream zoom level that synthesized tiles are built from.
pub const SYNTH_SOURCE_ZOOM: u8 = 14;

/// Lowest zoom level that is synthesized rather than passed through.
/// Zoom 12 uses a 4×4 block of zoom-14 tiles, zoom 13 a 2×2 block.
pub const SYNTH_MIN_ZOOM: u8 = 12;

/// Highest zoom level that is synthesized rather than passed through.
pub const SYNTH_MAX_ZOOM: u8 = 13;

/// Shared request-handler state.
///
/// Holds the upstream provider behind an `Arc`; nothing here is mutated
/// across requests.
pub struct AppState<P> {
    pub provider: Arc<P>,
}

impl<P> AppState<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

/// Builds the proxy router.
pub fn router<P>(state: AppState<P>) -> Router
where
    P: TileProvider + 'static,
{
    Router::new()
        .route("/tiles/:z/:x/:y", get(handler::get_tile::<P>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the listener and serves the proxy until the process exits.
pub async fn serve<P>(state: AppState<P>, port: u16) -> Result<(), std::io::Error>
where
    P: TileProvider + 'static,
{
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "tile proxy listening");
    axum::serve(listener, router(state)).await
}
