//! Row-count calculation for aspect-ratio-correct glyph output.

use crate::error::{AsciiError, Result};

/// Glyph aspect ratio (height / width).
/// Monospace glyphs are roughly twice as tall as they are wide, so emitting
/// one text row per pixel row would stretch the picture vertically.
pub const CHAR_ASPECT_RATIO: f64 = 2.0;

/// Number of text rows for a `width` x `height` luminance grid.
///
/// Computed as `floor(height / (CHAR_ASPECT_RATIO / (width / height)))`.
/// The result is usually smaller than `height` and may be zero for very
/// narrow grids; zero is a valid degenerate result, not an error.
///
/// # Errors
/// `InvalidDimension` when `width` or `height` is zero.
pub fn adjusted_height(width: u32, height: u32) -> Result<u32> {
    adjusted_height_with_aspect(width, height, CHAR_ASPECT_RATIO)
}

/// Same as [`adjusted_height`] with a custom glyph aspect ratio.
pub fn adjusted_height_with_aspect(width: u32, height: u32, char_aspect: f64) -> Result<u32> {
    if width == 0 || height == 0 {
        return Err(AsciiError::invalid_dimension(width, height));
    }

    let image_aspect = width as f64 / height as f64;
    let rows = height as f64 / (char_aspect / image_aspect);

    // `as` saturates, so NaN or huge values cannot wrap.
    Ok(rows.floor() as u32)
}

/// Source row sampled for output row `y` (nearest-row, no interpolation).
///
/// Computed as `floor(y * height / adjusted)` and clamped to the last row.
/// `adjusted` must be non-zero.
#[inline]
pub fn source_row(y: u32, height: u32, adjusted: u32) -> u32 {
    let step = height as f64 / adjusted as f64;
    let row = (y as f64 * step) as u32;
    row.min(height.saturating_sub(1))
}
