//! File loading and saving.
//!
//! Every file handle is scoped to one function call; buffered writers are
//! flushed explicitly so write failures surface as errors instead of being
//! lost on drop.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageError, ImageReader, RgbaImage};

use crate::error::{AsciiError, Result};

/// Open and decode an image file.
///
/// The format is guessed from the file contents, not the extension.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AsciiError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AsciiError::FileUnreadable {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| AsciiError::FileUnreadable {
            path: path.to_path_buf(),
            source: e,
        })?;

    let image = reader.decode().map_err(|e| AsciiError::DecodeError {
        path: path.to_path_buf(),
        source: e,
    })?;

    if image.width() == 0 || image.height() == 0 {
        return Err(AsciiError::invalid_dimension(image.width(), image.height()));
    }

    log::info!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Encode `image` as PNG at `path`, replacing any existing file.
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = create(path)?;
    let mut writer = BufWriter::new(file);

    PngEncoder::new(&mut writer)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| match e {
            ImageError::IoError(source) => AsciiError::WriteError {
                path: path.to_path_buf(),
                source,
            },
            other => AsciiError::EncodeError {
                path: path.to_path_buf(),
                source: other,
            },
        })?;

    writer.flush().map_err(|e| write_error(path, e))?;
    log::info!(
        "Wrote {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(())
}

/// Create `path` and hand a buffered writer to `write`.
///
/// The writer is flushed before returning; any I/O failure becomes
/// `WriteError` for `path`.
pub fn write_output<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    let file = create(path)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer).map_err(|e| write_error(path, e))?;
    writer.flush().map_err(|e| write_error(path, e))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| write_error(path, e))
}

fn write_error(path: &Path, source: std::io::Error) -> AsciiError {
    AsciiError::WriteError {
        path: path.to_path_buf(),
        source,
    }
}
