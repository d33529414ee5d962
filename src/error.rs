//! Error types for the conversion pipeline.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Errors that can occur while converting an image to glyph art.
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    /// The source image path does not exist
    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The source image exists but could not be opened or read
    #[error("Failed to read input file '{}': {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source bytes are not a decodable image
    #[error("Failed to decode image '{}': {source}", path.display())]
    DecodeError {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A zero width or height reached the resampler or glyph mapper
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// A glyph ramp with no characters
    #[error("Glyph ramp must contain at least one character")]
    EmptyRamp,

    /// Writing an output file failed
    #[error("Failed to write '{}': {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding an image for output failed
    #[error("Failed to encode image '{}': {source}", path.display())]
    EncodeError {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Configuration file could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, AsciiError>;

impl AsciiError {
    pub(crate) fn invalid_dimension(width: u32, height: u32) -> Self {
        AsciiError::InvalidDimension { width, height }
    }
}
