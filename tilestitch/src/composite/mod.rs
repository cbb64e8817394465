//! Tile compositor
//!
//! Synthesizes a single tile from the block of child tiles covering it at a
//! higher zoom level: fetches all children concurrently, assembles them onto
//! a canvas, downsamples to 256×256, and encodes as PNG.

mod assemble;
mod error;

pub use error::CompositeError;

use crate::coord::TileCoord;
use crate::provider::TileProvider;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// A fetched child tile ready for assembly.
struct FetchedTile {
    /// Absolute X at the child zoom (for error reporting)
    x: u32,
    /// Absolute Y at the child zoom
    y: u32,
    /// X offset within the block
    dx: u32,
    /// Y offset within the block
    dy: u32,
    /// Encoded image bytes as fetched
    data: Vec<u8>,
}

/// Synthesizes the tile at `parent` from its children `zoom_diff` levels deeper.
///
/// All child fetches run concurrently; the first failure cancels the
/// remaining fetches and fails the whole operation. Assembly and encoding
/// run on the blocking pool.
///
/// Returns the encoded 256×256 PNG.
pub async fn composite_tile<P>(
    provider: Arc<P>,
    parent: TileCoord,
    zoom_diff: u8,
) -> Result<Vec<u8>, CompositeError>
where
    P: TileProvider + 'static,
{
    let target_zoom = parent.zoom + zoom_diff;
    let grid_size = 1u32 << zoom_diff;

    let mut fetches = JoinSet::new();
    for child in parent.children(zoom_diff) {
        let provider = Arc::clone(&provider);
        fetches.spawn(async move {
            match provider.fetch_tile(target_zoom, child.x, child.y).await {
                Ok(data) => Ok(FetchedTile {
                    x: child.x,
                    y: child.y,
                    dx: child.dx,
                    dy: child.dy,
                    data,
                }),
                Err(e) => Err(CompositeError::FetchFailed {
                    zoom: target_zoom,
                    x: child.x,
                    y: child.y,
                    message: e.to_string(),
                }),
            }
        });
    }

    let mut tiles = Vec::with_capacity((grid_size * grid_size) as usize);
    while let Some(joined) = fetches.join_next().await {
        match joined {
            Ok(Ok(tile)) => tiles.push(tile),
            Ok(Err(e)) => {
                // One failed child aborts the whole composite.
                fetches.abort_all();
                return Err(e);
            }
            Err(join_err) => {
                if !join_err.is_cancelled() {
                    warn!(error = %join_err, "child fetch task panicked");
                }
                fetches.abort_all();
                return Err(CompositeError::Internal(join_err.to_string()));
            }
        }
    }

    debug!(
        parent = %parent,
        target_zoom,
        children = tiles.len(),
        "all child tiles fetched, assembling"
    );

    tokio::task::spawn_blocking(move || assemble::assemble_and_downsample(tiles, grid_size))
        .await
        .map_err(|e| CompositeError::Internal(format!("assembly task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::collections::HashSet;
    use std::io::Cursor;
    use std::sync::Mutex;

    /// Mock provider that serves solid-color tiles and can fail specific
    /// addresses.
    struct MockProvider {
        failures: HashSet<(u8, u32, u32)>,
        requested: Mutex<Vec<(u8, u32, u32)>>,
    }

    impl MockProvider {
        fn new() -> Self {
            Self {
                failures: HashSet::new(),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn with_failure(mut self, zoom: u8, x: u32, y: u32) -> Self {
            self.failures.insert((zoom, x, y));
            self
        }

        fn requested(&self) -> Vec<(u8, u32, u32)> {
            self.requested.lock().unwrap().clone()
        }
    }

    impl TileProvider for MockProvider {
        async fn fetch_tile(&self, zoom: u8, x: u32, y: u32) -> Result<Vec<u8>, ProviderError> {
            self.requested.lock().unwrap().push((zoom, x, y));

            if self.failures.contains(&(zoom, x, y)) {
                return Err(ProviderError::HttpError(format!(
                    "HTTP 404 Not Found from /{}/{}/{}",
                    zoom, x, y
                )));
            }

            let img = RgbaImage::from_fn(256, 256, |_, _| Rgba([x as u8, y as u8, zoom, 255]));
            let mut buffer = Vec::new();
            img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
                .unwrap();
            Ok(buffer)
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    #[tokio::test]
    async fn test_composite_2x2_produces_256_png() {
        let provider = Arc::new(MockProvider::new());
        let parent = TileCoord::new(13, 100, 200);

        let bytes = composite_tile(Arc::clone(&provider), parent, 1)
            .await
            .unwrap();

        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!(img.width(), 256);
        assert_eq!(img.height(), 256);

        // Exactly the 4 children at zoom 14, based at (200, 400).
        let mut requested = provider.requested();
        requested.sort();
        assert_eq!(
            requested,
            vec![
                (14, 200, 400),
                (14, 200, 401),
                (14, 201, 400),
                (14, 201, 401)
            ]
        );
    }

    #[tokio::test]
    async fn test_composite_4x4_produces_256_png() {
        let provider = Arc::new(MockProvider::new());
        let parent = TileCoord::new(12, 50, 60);

        let bytes = composite_tile(Arc::clone(&provider), parent, 2)
            .await
            .unwrap();

        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!(img.width(), 256);
        assert_eq!(img.height(), 256);
        assert_eq!(provider.requested().len(), 16);
    }

    #[tokio::test]
    async fn test_single_fetch_failure_fails_composite() {
        let provider = Arc::new(MockProvider::new().with_failure(14, 201, 400));
        let parent = TileCoord::new(13, 100, 200);

        let result = composite_tile(provider, parent, 1).await;
        match result {
            Err(CompositeError::FetchFailed { zoom, x, y, .. }) => {
                assert_eq!((zoom, x, y), (14, 201, 400));
            }
            other => panic!("Expected FetchFailed, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_malformed_child_bytes_fail_composite() {
        struct GarbageProvider;

        impl TileProvider for GarbageProvider {
            async fn fetch_tile(
                &self,
                _zoom: u8,
                _x: u32,
                _y: u32,
            ) -> Result<Vec<u8>, ProviderError> {
                Ok(vec![0x00, 0x01, 0x02])
            }

            fn name(&self) -> &str {
                "garbage"
            }
        }

        let result = composite_tile(Arc::new(GarbageProvider), TileCoord::new(13, 0, 0), 1).await;
        assert!(matches!(result, Err(CompositeError::DecodeFailed { .. })));
    }
}
