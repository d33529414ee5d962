//! Output renderers for glyph grids.
//!
//! Each renderer serializes an [`AsciiGrid`] into one output format. They are
//! independent of each other and never modify the grid.

use std::io::{self, Write};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, Rgba, RgbaImage};

use crate::ascii::{source_row, AsciiGrid};
use crate::font::{self, GLYPH_SIZE};

/// Serializes a glyph grid into one output format.
pub trait Renderer {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    /// Write `grid` to `out`.
    fn render(&self, grid: &AsciiGrid, out: &mut dyn Write) -> io::Result<()>;
}

/// Available renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    PlainText,
    Html,
    /// HTML with each glyph coloured from the resized source image
    HtmlColor,
    Raster,
}

impl RendererKind {
    /// Build the renderer. `resized` is only read by `HtmlColor`.
    pub fn build<'a>(&self, resized: &'a RgbaImage) -> Box<dyn Renderer + 'a> {
        match self {
            RendererKind::PlainText => Box::new(PlainText),
            RendererKind::Html => Box::new(Html),
            RendererKind::HtmlColor => Box::new(HtmlColor::new(resized)),
            RendererKind::Raster => Box::new(Raster::default()),
        }
    }
}

// ==================== Plain text ====================

/// One line per grid row, each terminated by `\n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl Renderer for PlainText {
    fn name(&self) -> &'static str {
        "text"
    }

    fn render(&self, grid: &AsciiGrid, out: &mut dyn Write) -> io::Result<()> {
        for line in grid.lines() {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

// ==================== HTML ====================

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en"><head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=0.8">
<title>AsciiImage</title>
</head>
<body>
<code><span class="ascii" style="color: black; background: white; display: inline-block; white-space: pre; letter-spacing: 0; line-height: 0.9; font-family: 'Consolas', 'BitstreamVeraSansMono', 'CourierNew', Courier, monospace; font-size: 10px; border-width: 1px; border-style: solid; border-color: lightgray;">"#;

const HTML_TAIL: &str = "</span></code></body></html>\n";

const HTML_COLOR_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en"><head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Color ASCII Art</title>
</head>
<body style="font-family: monospace; line-height: 1; white-space: pre;">"#;

const HTML_COLOR_TAIL: &str = "</body></html>\n";

/// Escape one glyph for use as HTML text.
fn escape_html(c: char) -> std::borrow::Cow<'static, str> {
    match c {
        '&' => "&amp;".into(),
        '<' => "&lt;".into(),
        '>' => "&gt;".into(),
        '"' => "&quot;".into(),
        _ => c.to_string().into(),
    }
}

/// Black-on-white monospace document, one `<span>` per glyph and one `<br>` per row.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html;

impl Renderer for Html {
    fn name(&self) -> &'static str {
        "html"
    }

    fn render(&self, grid: &AsciiGrid, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(HTML_HEAD.as_bytes())?;
        for line in grid.lines() {
            for c in line.chars() {
                write!(out, "<span>{}</span>", escape_html(c))?;
            }
            out.write_all(b"<br>")?;
        }
        out.write_all(HTML_TAIL.as_bytes())
    }
}

/// HTML where each glyph takes the colour of the pixel it was sampled from.
#[derive(Debug, Clone, Copy)]
pub struct HtmlColor<'a> {
    image: &'a RgbaImage,
}

impl<'a> HtmlColor<'a> {
    /// `image` is the resized image the grid was mapped from.
    pub fn new(image: &'a RgbaImage) -> Self {
        Self { image }
    }
}

impl Renderer for HtmlColor<'_> {
    fn name(&self) -> &'static str {
        "html-color"
    }

    fn render(&self, grid: &AsciiGrid, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(HTML_COLOR_HEAD.as_bytes())?;

        let (img_w, img_h) = self.image.dimensions();
        let rows = grid.height() as u32;

        for (y, line) in grid.lines().iter().enumerate() {
            let src_y = if img_h == 0 {
                0
            } else {
                source_row(y as u32, img_h, rows)
            };
            for (x, c) in line.chars().enumerate() {
                let x = x as u32;
                if x >= img_w || src_y >= img_h {
                    continue;
                }
                let [r, g, b, _] = self.image.get_pixel(x, src_y).0;
                write!(
                    out,
                    r#"<span style="color: rgb({},{},{});">{}</span>"#,
                    r,
                    g,
                    b,
                    escape_html(c)
                )?;
            }
            out.write_all(b"<br>")?;
        }

        out.write_all(HTML_COLOR_TAIL.as_bytes())
    }
}

// ==================== Raster ====================

/// Fixed canvas width. Wider content is clipped.
pub const CANVAS_WIDTH: u32 = 1400;
/// Vertical distance between text rows.
pub const LINE_HEIGHT: u32 = 11;
/// Baseline of the first text row.
pub const FIRST_BASELINE: u32 = 20;
/// Pen start on every row.
pub const LEFT_MARGIN: u32 = 10;
/// Horizontal pen advance per glyph.
pub const GLYPH_ADVANCE: u32 = 7;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Draws the grid with the built-in bitmap font and encodes it as PNG.
///
/// Canvas is `canvas_width` wide and `rows * line_height` tall (at least one
/// pixel). Anything drawn outside it is silently dropped.
#[derive(Debug, Clone, Copy)]
pub struct Raster {
    pub canvas_width: u32,
    pub line_height: u32,
    pub first_baseline: u32,
    pub left_margin: u32,
    pub advance: u32,
}

impl Default for Raster {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            line_height: LINE_HEIGHT,
            first_baseline: FIRST_BASELINE,
            left_margin: LEFT_MARGIN,
            advance: GLYPH_ADVANCE,
        }
    }
}

impl Raster {
    /// Canvas height for `rows` text rows.
    pub fn canvas_height(&self, rows: usize) -> u32 {
        (rows as u32).saturating_mul(self.line_height).max(1)
    }

    /// Whether a line of `chars` glyphs extends past the right edge.
    pub fn clips(&self, chars: u32) -> bool {
        let right = self.left_margin as u64 + chars as u64 * self.advance as u64;
        right > self.canvas_width as u64
    }

    /// Draw `grid` onto a fresh white canvas.
    pub fn rasterize(&self, grid: &AsciiGrid) -> RgbaImage {
        let height = self.canvas_height(grid.height());
        let mut canvas = RgbaImage::from_pixel(self.canvas_width, height, WHITE);

        for (row, line) in grid.lines().iter().enumerate() {
            let baseline = self.first_baseline as u64 + row as u64 * self.line_height as u64;
            // Glyph bottom row sits just above the baseline.
            let Some(top) = baseline.checked_sub(GLYPH_SIZE as u64) else {
                continue;
            };
            for (col, c) in line.chars().enumerate() {
                let left = self.left_margin as u64 + col as u64 * self.advance as u64;
                if left >= self.canvas_width as u64 {
                    break;
                }
                draw_glyph(&mut canvas, c, left, top);
            }
        }

        canvas
    }
}

fn draw_glyph(canvas: &mut RgbaImage, c: char, left: u64, top: u64) {
    let bitmap = font::glyph(c);
    let (w, h) = (canvas.width() as u64, canvas.height() as u64);

    for gy in 0..GLYPH_SIZE {
        let y = top + gy as u64;
        if y >= h {
            break;
        }
        for gx in 0..GLYPH_SIZE {
            let x = left + gx as u64;
            if x >= w {
                break;
            }
            if font::is_set(&bitmap, gx, gy) {
                canvas.put_pixel(x as u32, y as u32, BLACK);
            }
        }
    }
}

impl Renderer for Raster {
    fn name(&self) -> &'static str {
        "raster"
    }

    fn render(&self, grid: &AsciiGrid, out: &mut dyn Write) -> io::Result<()> {
        if self.clips(grid.width()) {
            log::warn!(
                "Raster output clipped: {} glyphs per row exceed the {}px canvas",
                grid.width(),
                self.canvas_width
            );
        }

        let canvas = self.rasterize(grid);
        PngEncoder::new(out)
            .write_image(
                canvas.as_raw(),
                canvas.width(),
                canvas.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| match e {
                ImageError::IoError(e) => e,
                other => io::Error::other(other),
            })
    }
}
