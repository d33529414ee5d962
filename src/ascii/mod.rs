//! Image to glyph-art conversion core.
//!
//! This module provides the pipeline for turning a decoded image into a
//! grid of glyphs:
//!
//! 1. **Resampling** - Catmull-Rom resize to a target width
//! 2. **Luminance** - RGB to BT.601 luma, alpha ignored
//! 3. **Glyph mapping** - Row reduction for glyph aspect, then luma to ramp index
//!
//! Every stage allocates a fresh value; nothing is mutated after it is produced.

mod charset;
mod dimensions;
mod grayscale;
mod mapping;
mod resample;

pub use charset::{GlyphRamp, STANDARD_RAMP};
pub use dimensions::{
    adjusted_height, adjusted_height_with_aspect, source_row, CHAR_ASPECT_RATIO,
};
pub use grayscale::{luma, to_luminance, LuminanceGrid};
pub use mapping::{map_to_grid, ramp_index, AsciiGrid};
pub use resample::{resize_to_width, scaled_height, RESAMPLE_FILTER};

use image::{DynamicImage, RgbaImage};

use crate::error::Result;

/// Every intermediate produced by one conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Source resized to the target width
    pub resized: RgbaImage,
    /// Luminance of `resized`
    pub luminance: LuminanceGrid,
    /// Glyphs mapped from `luminance`
    pub grid: AsciiGrid,
}

/// Run resample, luminance and glyph mapping on an in-memory image.
///
/// Deterministic: the same image, width and ramp always give the same grid.
pub fn convert(image: &DynamicImage, target_width: u32, ramp: &GlyphRamp) -> Result<Conversion> {
    let source = image.to_rgba8();
    let resized = resize_to_width(&source, target_width)?;
    let luminance = to_luminance(&resized);
    let grid = map_to_grid(&luminance, ramp)?;
    Ok(Conversion {
        resized,
        luminance,
        grid,
    })
}
