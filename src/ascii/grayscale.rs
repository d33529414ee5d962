//! RGB to luminance conversion using ITU-R BT.601 luminance formula.

use image::{Rgba, RgbaImage};

/// A grid of luminance values (0-255), one per source pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl LuminanceGrid {
    /// Wrap row-major luminance data.
    ///
    /// Returns `None` when `data.len()` does not equal `width * height`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Luminance at `(x, y)`. Panics if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Row `y` as a slice of `width` values.
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    pub fn values(&self) -> &[u8] {
        &self.data
    }

    /// Render the grid back into an opaque RGBA image with R == G == B.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let v = self.get(x, y);
            Rgba([v, v, v, 255])
        })
    }
}

/// BT.601 luma of one colour, rounded to the nearest integer.
///
/// The coefficients are scaled by 1000 (299 + 587 + 114 = 1000) so the
/// computation stays in integer math; adding 500 before dividing rounds.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = (299 * r as u32 + 587 * g as u32 + 114 * b as u32 + 500) / 1000;
    y as u8
}

/// Convert an RGBA image to a luminance grid.
///
/// Alpha is ignored: transparent pixels use their stored RGB as if opaque.
pub fn to_luminance(image: &RgbaImage) -> LuminanceGrid {
    let pixel_count = (image.width() as usize) * (image.height() as usize);
    let mut data = Vec::with_capacity(pixel_count);

    for px in image.pixels() {
        let [r, g, b, _] = px.0;
        data.push(luma(r, g, b));
    }

    LuminanceGrid {
        width: image.width(),
        height: image.height(),
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
    }

    #[test]
    fn test_luma_rounds_to_nearest() {
        // 0.299 * 255 = 76.245
        assert_eq!(luma(255, 0, 0), 76);
        // 0.587 * 255 = 149.685
        assert_eq!(luma(0, 255, 0), 150);
        // 0.114 * 255 = 29.07
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn test_gray_input_is_preserved() {
        for v in 0..=255u8 {
            assert_eq!(luma(v, v, v), v);
        }
    }

    #[test]
    fn test_alpha_ignored() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([200, 100, 50, 255]));
        img.put_pixel(1, 0, Rgba([200, 100, 50, 0]));
        let grid = to_luminance(&img);
        assert_eq!(grid.get(0, 0), grid.get(1, 0));
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        assert!(LuminanceGrid::new(2, 2, vec![0; 3]).is_none());
        assert!(LuminanceGrid::new(2, 2, vec![0; 4]).is_some());
    }

    #[test]
    fn test_to_image_is_opaque_gray() {
        let grid = LuminanceGrid::new(2, 1, vec![10, 240]).unwrap();
        let img = grid.to_image();
        assert_eq!(img.get_pixel(0, 0).0, [10, 10, 10, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [240, 240, 240, 255]);
    }
}
