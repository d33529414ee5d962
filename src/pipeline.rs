//! End-to-end conversion run for asciify.
//!
//! Loads the source image, runs the conversion core and writes every
//! artifact. The first failure stops the run and is returned to the caller.

use std::path::PathBuf;

use crate::ascii::{self, Conversion, GlyphRamp};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::io::{load_image, save_image, write_output};
use crate::render::RendererKind;

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// Source image dimensions
    pub source_size: (u32, u32),
    /// Resized image dimensions
    pub resized_size: (u32, u32),
    /// Glyph grid columns and rows
    pub grid_size: (u32, usize),
    /// Every file written, in write order
    pub written: Vec<PathBuf>,
}

/// Renderers and their destinations for `config`, in write order.
pub fn output_plan(config: &PipelineConfig) -> Vec<(RendererKind, PathBuf)> {
    let html = if config.html_color {
        RendererKind::HtmlColor
    } else {
        RendererKind::Html
    };
    vec![
        (RendererKind::PlainText, config.ascii_output.clone()),
        (html, config.html_output.clone()),
        (RendererKind::Raster, config.image_output.clone()),
    ]
}

/// Run the full pipeline described by `config`.
///
/// Order: load, resize, save resized, luminance, save gray, map, then each
/// renderer from [`output_plan`].
pub fn run(config: &PipelineConfig) -> Result<PipelineReport> {
    let source = load_image(&config.input)?;
    let ramp = GlyphRamp::standard();
    let mut written = Vec::new();

    let Conversion {
        resized,
        luminance,
        grid,
    } = ascii::convert(&source, config.target_width, &ramp)?;

    log::info!(
        "Resized {}x{} -> {}x{}",
        source.width(),
        source.height(),
        resized.width(),
        resized.height()
    );
    save_image(&resized, &config.resize_output)?;
    written.push(config.resize_output.clone());

    save_image(&luminance.to_image(), &config.gray_output)?;
    written.push(config.gray_output.clone());

    if grid.is_empty() {
        log::warn!(
            "Glyph grid is empty ({}x{} image is too narrow for any text rows)",
            luminance.width(),
            luminance.height()
        );
    } else {
        log::info!("Mapped {} rows of {} glyphs", grid.height(), grid.width());
    }

    for (kind, path) in output_plan(config) {
        let renderer = kind.build(&resized);
        log::debug!("Rendering {} to {}", renderer.name(), path.display());
        write_output(&path, |out| renderer.render(&grid, out))?;
        written.push(path);
    }

    Ok(PipelineReport {
        source_size: (source.width(), source.height()),
        resized_size: resized.dimensions(),
        grid_size: (grid.width(), grid.height()),
        written,
    })
}
