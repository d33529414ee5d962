//! asciify library crate.
//!
//! Converts a raster image into glyph art and renders it as plain text,
//! HTML, or a PNG drawn with a built-in bitmap font.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod font;
pub mod io;
pub mod pipeline;
pub mod render;

pub use error::{AsciiError, Result};
