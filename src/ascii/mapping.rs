//! Luminance to glyph mapping.

use std::fmt;

use super::charset::GlyphRamp;
use super::dimensions::{adjusted_height, source_row};
use super::grayscale::LuminanceGrid;
use crate::error::Result;

/// Equal-length lines of glyphs produced by [`map_to_grid`].
///
/// Every line is exactly `width` characters long; the grid may hold zero lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiGrid {
    width: u32,
    lines: Vec<String>,
}

impl AsciiGrid {
    /// Build a grid from pre-rendered lines.
    ///
    /// Returns `None` if the lines differ in character count.
    pub fn from_lines(lines: Vec<String>) -> Option<Self> {
        let width = lines.first().map_or(0, |l| l.chars().count());
        if lines.iter().any(|l| l.chars().count() != width) {
            return None;
        }
        Some(Self {
            width: width as u32,
            lines,
        })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Characters per line (the luminance grid width).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over `(x, y, glyph)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, char)> + '_ {
        self.lines.iter().enumerate().flat_map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(move |(x, c)| (x as u32, y as u32, c))
        })
    }
}

/// One line per row, each terminated by `\n`.
impl fmt::Display for AsciiGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Ramp index for a luminance value.
///
/// `floor(value * (levels - 1) / 255)`, clamped to `[0, levels - 1]`.
/// Non-decreasing in `value`.
#[inline]
pub fn ramp_index(value: u8, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }
    let idx = (value as usize * (levels - 1)) / 255;
    idx.min(levels - 1)
}

/// Map a luminance grid to a glyph grid.
///
/// Columns map 1:1. Rows are reduced to [`adjusted_height`] by nearest-row
/// sampling to correct for glyphs being taller than wide.
///
/// # Errors
/// `InvalidDimension` when the grid has zero width or height.
pub fn map_to_grid(grid: &LuminanceGrid, ramp: &GlyphRamp) -> Result<AsciiGrid> {
    let width = grid.width();
    let height = grid.height();
    let rows = adjusted_height(width, height)?;

    log::debug!(
        "Mapping {}x{} luminance grid to {} rows with {} glyph levels",
        width,
        height,
        rows,
        ramp.len()
    );

    let levels = ramp.len();
    let mut lines = Vec::with_capacity(rows as usize);

    for y in 0..rows {
        let src_y = source_row(y, height, rows);
        let line: String = grid
            .row(src_y)
            .iter()
            .map(|&v| ramp.glyph(ramp_index(v, levels)))
            .collect();
        lines.push(line);
    }

    Ok(AsciiGrid { width, lines })
}
