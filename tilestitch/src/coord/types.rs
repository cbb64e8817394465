//! Coordinate type definitions

use std::fmt;

/// Native pixel size of an upstream tile.
pub const TILE_SIZE: u32 = 256;

/// Tile address in the slippy-map XYZ scheme.
///
/// x and y are conventionally in `[0, 2^zoom)`, but the proxy does not
/// enforce this: out-of-range addresses are forwarded to the upstream
/// provider, which may reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// Zoom level
    pub zoom: u8,
    /// X coordinate (east-west), 0 at west
    pub x: u32,
    /// Y coordinate (north-south), 0 at north
    pub y: u32,
}

impl TileCoord {
    pub fn new(zoom: u8, x: u32, y: u32) -> Self {
        Self { zoom, x, y }
    }

    /// Returns an iterator over the child tiles `zoom_diff` levels deeper.
    ///
    /// The children form a contiguous `2^zoom_diff` square block based at
    /// `(x * 2^zoom_diff, y * 2^zoom_diff)`, yielded with the x offset as
    /// the outer loop and the y offset as the inner loop.
    #[inline]
    pub fn children(&self, zoom_diff: u8) -> ChildTilesIterator {
        let factor = 1u32 << zoom_diff;
        ChildTilesIterator {
            base_x: self.x * factor,
            base_y: self.y * factor,
            factor,
            current: 0,
        }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// One child tile within an expansion block.
///
/// Carries both the absolute address and the offset within the block, so
/// canvas placement is derived from the block base plus loop index instead
/// of being re-derived from the absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildTile {
    /// Absolute X at the child zoom level
    pub x: u32,
    /// Absolute Y at the child zoom level
    pub y: u32,
    /// X offset within the block (0..factor)
    pub dx: u32,
    /// Y offset within the block (0..factor)
    pub dy: u32,
}

/// Iterator over the child tiles of an expansion block.
///
/// Yields `factor^2` tiles in x-major order.
#[derive(Debug, Clone)]
pub struct ChildTilesIterator {
    base_x: u32,
    base_y: u32,
    factor: u32,
    current: u32,
}

impl Iterator for ChildTilesIterator {
    type Item = ChildTile;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.factor * self.factor {
            return None;
        }

        let dx = self.current / self.factor;
        let dy = self.current % self.factor;

        self.current += 1;

        Some(ChildTile {
            x: self.base_x + dx,
            y: self.base_y + dy,
            dx,
            dy,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.factor * self.factor - self.current) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChildTilesIterator {
    fn len(&self) -> usize {
        (self.factor * self.factor - self.current) as usize
    }
}
