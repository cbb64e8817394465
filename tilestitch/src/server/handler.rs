//! Tile request handler.

use super::error::ProxyError;
use super::{AppState, SYNTH_MAX_ZOOM, SYNTH_MIN_ZOOM, SYNTH_SOURCE_ZOOM};
use crate::composite::composite_tile;
use crate::coord::TileCoord;
use crate::provider::TileProvider;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use std::sync::Arc;
use tracing::debug;

/// Dispatches a tile request.
///
/// Synthesized zoom levels go through the compositor; all other zoom levels
/// are a single passthrough fetch whose bytes are returned unmodified.
pub(super) async fn get_tile<P>(
    State(state): State<AppState<P>>,
    Path((z, x, y)): Path<(u8, u32, u32)>,
) -> Result<impl IntoResponse, ProxyError>
where
    P: TileProvider + 'static,
{
    let tile = TileCoord::new(z, x, y);

    let bytes = if (SYNTH_MIN_ZOOM..=SYNTH_MAX_ZOOM).contains(&z) {
        let zoom_diff = SYNTH_SOURCE_ZOOM - z;
        debug!(%tile, zoom_diff, "synthesizing tile from upstream children");
        composite_tile(Arc::clone(&state.provider), tile, zoom_diff).await?
    } else {
        debug!(%tile, "passthrough fetch");
        state.provider.fetch_tile(z, x, y).await?
    };

    Ok(([(header::CONTENT_TYPE, "image/png")], bytes))
}
