//! Output grid geometry and resampling of the source image onto it.

use crate::source::DecodedImage;
use image::imageops::{self, FilterType};
use image::RgbaImage;

// Terminal and browser monospace cells are ~1:2
const CELL_ASPECT: f64 = 2.0;

/// Grids above this many cells get a warning before resampling (~64 MB of RGBA).
pub const LARGE_GRID_CELLS: u64 = 16_000_000;

/// Columns and rows of the character grid for `image` at `width` columns.
///
/// Rows are `floor(width / aspect / 2)`. Returns `None` when the geometry
/// is degenerate (empty image, zero width, or zero rows).
pub fn output_dimensions(image: &DecodedImage, width: u32) -> Option<(u32, u32)> {
    let aspect = image.aspect_ratio()?;
    if width == 0 {
        return None;
    }
    let rows = (f64::from(width) / aspect / CELL_ASPECT).floor();
    if rows < 1.0 || !rows.is_finite() {
        return None;
    }
    Some((width, rows.min(f64::from(u32::MAX)) as u32))
}

pub fn is_large_grid(cols: u32, rows: u32) -> bool {
    u64::from(cols) * u64::from(rows) > LARGE_GRID_CELLS
}

/// Resample the image to exactly `cols × rows` pixels, one per output cell.
pub fn resample(image: &DecodedImage, cols: u32, rows: u32) -> RgbaImage {
    let pixels = image.pixels();
    if pixels.dimensions() == (cols, rows) {
        return pixels.clone();
    }
    if is_large_grid(cols, rows) {
        log::warn!(
            "resampling {}x{} image to a {}x{} grid; narrow the width for tall images",
            pixels.width(),
            pixels.height(),
            cols,
            rows
        );
    }
    imageops::resize(pixels, cols, rows, FilterType::Triangle)
}
