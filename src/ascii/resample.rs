//! Width-targeted image resampling.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::{AsciiError, Result};

/// Interpolation kernel used for all resizing.
///
/// Catmull-Rom is a cubic kernel: downscaling averages neighbouring pixels
/// instead of dropping them.
pub const RESAMPLE_FILTER: FilterType = FilterType::CatmullRom;

/// Height that preserves the source aspect ratio at `target_width`.
///
/// Computed as `round(src_height * target_width / src_width)`.
///
/// # Errors
/// `InvalidDimension` when any input is zero or the result rounds to zero.
pub fn scaled_height(src_width: u32, src_height: u32, target_width: u32) -> Result<u32> {
    if src_width == 0 || src_height == 0 || target_width == 0 {
        return Err(AsciiError::invalid_dimension(src_width, src_height));
    }

    // Integer rounding: (a + b/2) / b, in u64 to avoid overflow.
    let num = src_height as u64 * target_width as u64;
    let den = src_width as u64;
    let height = (num + den / 2) / den;

    if height == 0 || height > u32::MAX as u64 {
        return Err(AsciiError::invalid_dimension(target_width, height.min(u32::MAX as u64) as u32));
    }
    Ok(height as u32)
}

/// Resize `image` to exactly `target_width` pixels wide, keeping its aspect ratio.
///
/// Always allocates a new image, even when the size is unchanged.
pub fn resize_to_width(image: &RgbaImage, target_width: u32) -> Result<RgbaImage> {
    let height = scaled_height(image.width(), image.height(), target_width)?;
    Ok(imageops::resize(image, target_width, height, RESAMPLE_FILTER))
}
