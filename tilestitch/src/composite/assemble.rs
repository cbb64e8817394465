//! Canvas assembly and downsampling.
//!
//! Takes fetched child tiles, places them on a transparent RGBA canvas at
//! their block offsets, downsamples the canvas to the standard tile size,
//! and encodes the result as PNG.

use super::{CompositeError, FetchedTile};
use crate::coord::TILE_SIZE;
use image::imageops::FilterType;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

/// Assembles child tiles into a `grid_size * 256` square canvas, then
/// downsamples to 256×256 and encodes as PNG.
///
/// Placement is opaque overwrite at `(dx * 256, dy * 256)`; there is no
/// blending. A decode failure for any tile fails the whole assembly.
pub(super) fn assemble_and_downsample(
    tiles: Vec<FetchedTile>,
    grid_size: u32,
) -> Result<Vec<u8>, CompositeError> {
    let canvas_size = grid_size * TILE_SIZE;
    let mut canvas = RgbaImage::new(canvas_size, canvas_size);

    for tile in &tiles {
        let img = image::load_from_memory(&tile.data)
            .map_err(|e| CompositeError::DecodeFailed {
                x: tile.x,
                y: tile.y,
                message: e.to_string(),
            })?
            .to_rgba8();

        place_tile(&mut canvas, &img, tile.dx * TILE_SIZE, tile.dy * TILE_SIZE);
    }

    let scaled = image::imageops::resize(&canvas, TILE_SIZE, TILE_SIZE, FilterType::Lanczos3);

    let mut buffer = Vec::new();
    scaled
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|e| CompositeError::EncodeFailed(e.to_string()))?;

    Ok(buffer)
}

/// Places a child tile onto the canvas at the specified offset.
fn place_tile(canvas: &mut RgbaImage, tile: &RgbaImage, x_offset: u32, y_offset: u32) {
    // Handle tiles that might not be exactly 256x256
    let width = tile.width().min(TILE_SIZE);
    let height = tile.height().min(TILE_SIZE);

    for y in 0..height {
        for x in 0..width {
            canvas.put_pixel(x_offset + x, y_offset + y, *tile.get_pixel(x, y));
        }
    }
}
