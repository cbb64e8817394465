//! Tile coordinate module
//!
//! Provides the slippy-map tile address type and the expansion of a parent
//! tile into the block of child tiles that covers it at a higher zoom level.

mod types;

pub use types::{ChildTile, ChildTilesIterator, TileCoord, TILE_SIZE};
