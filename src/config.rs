//! Configuration for asciify.
//!
//! [`PipelineConfig`] is the explicit settings struct handed to
//! [`crate::pipeline::run`]. It can be partially filled from a TOML file
//! loaded from `~/.config/asciify/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Resize target in pixels (and therefore glyphs per row).
pub const DEFAULT_TARGET_WIDTH: u32 = 200;

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Source image path (default `input.png`)
    pub input: PathBuf,
    /// Resized colour image (default `resize.png`)
    pub resize_output: PathBuf,
    /// Luminance image (default `gray.png`)
    pub gray_output: PathBuf,
    /// Plain-text glyph art (default `result.txt`)
    pub ascii_output: PathBuf,
    /// HTML glyph art (default `result.html`)
    pub html_output: PathBuf,
    /// Rasterized glyph art (default `output.png`)
    pub image_output: PathBuf,
    /// Resize width in pixels (default 200)
    pub target_width: u32,
    /// Colour each HTML glyph from the resized image (default off)
    pub html_color: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.png"),
            resize_output: PathBuf::from("resize.png"),
            gray_output: PathBuf::from("gray.png"),
            ascii_output: PathBuf::from("result.txt"),
            html_output: PathBuf::from("result.html"),
            image_output: PathBuf::from("output.png"),
            target_width: DEFAULT_TARGET_WIDTH,
            html_color: false,
        }
    }
}

impl PipelineConfig {
    /// Overlay values present in a config file onto `self`.
    pub fn apply_file(&mut self, file: &Config) {
        let out = &file.output;
        if let Some(p) = &out.input {
            self.input = p.clone();
        }
        if let Some(p) = &out.resize_output {
            self.resize_output = p.clone();
        }
        if let Some(p) = &out.gray_output {
            self.gray_output = p.clone();
        }
        if let Some(p) = &out.ascii_output {
            self.ascii_output = p.clone();
        }
        if let Some(p) = &out.html_output {
            self.html_output = p.clone();
        }
        if let Some(p) = &out.image_output {
            self.image_output = p.clone();
        }
        if let Some(color) = file.html.color {
            self.html_color = color;
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub html: HtmlConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub input: Option<PathBuf>,
    pub resize_output: Option<PathBuf>,
    pub gray_output: Option<PathBuf>,
    pub ascii_output: Option<PathBuf>,
    pub html_output: Option<PathBuf>,
    pub image_output: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct HtmlConfig {
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration from a file path.
    ///
    /// With `None`, the default path is tried and a missing file yields the
    /// default config. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_path(), false),
        };

        if !path.exists() {
            if required {
                return Err(ConfigError::NotFound { path });
            }
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Failed to read config file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("asciify").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/asciify/config.toml")
        })
}
