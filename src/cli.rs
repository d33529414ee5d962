//! Command-line interface definitions.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError, PipelineConfig};

/// Convert a PNG image into glyph art (text, HTML and PNG)
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Convert an image into glyph art", long_about = None)]
pub struct Args {
    /// Path to the input image file [default: input.png]
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Path to save the resized image [default: resize.png]
    #[arg(long = "resize_output")]
    pub resize_output: Option<PathBuf>,

    /// Path to save the grayscale image [default: gray.png]
    #[arg(long = "gray_output")]
    pub gray_output: Option<PathBuf>,

    /// Path to save the glyph art text file [default: result.txt]
    #[arg(long = "ascii_output")]
    pub ascii_output: Option<PathBuf>,

    /// Path to save the glyph art as HTML [default: result.html]
    #[arg(long = "html_output")]
    pub html_output: Option<PathBuf>,

    /// Path to save the glyph art as an image [default: output.png]
    #[arg(long = "image_output")]
    pub image_output: Option<PathBuf>,

    /// Colour each HTML glyph from the resized image
    #[arg(long)]
    pub html_color: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log debug details
    #[arg(long, short, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(long, short)]
    pub quiet: bool,
}

impl Args {
    /// Default log filter for these flags.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        }
    }

    /// Merge defaults, the config file, then command-line flags.
    pub fn to_pipeline_config(&self) -> Result<PipelineConfig, ConfigError> {
        let file = Config::load(self.config.as_deref())?;
        Ok(self.merge(&file))
    }

    /// Merge defaults, `file`, then command-line flags (flags win).
    pub fn merge(&self, file: &Config) -> PipelineConfig {
        let mut cfg = PipelineConfig::default();
        cfg.apply_file(file);

        let overrides = [
            (&self.input, &mut cfg.input),
            (&self.resize_output, &mut cfg.resize_output),
            (&self.gray_output, &mut cfg.gray_output),
            (&self.ascii_output, &mut cfg.ascii_output),
            (&self.html_output, &mut cfg.html_output),
            (&self.image_output, &mut cfg.image_output),
        ];
        for (flag, field) in overrides {
            if let Some(path) = flag {
                *field = path.clone();
            }
        }
        if self.html_color {
            cfg.html_color = true;
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== CLI Default Values Tests ====================

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["asciify"]);
        assert!(args.input.is_none());
        assert!(args.config.is_none());
        assert!(!args.html_color);
        assert_eq!(args.log_level(), log::LevelFilter::Info);

        let cfg = args.merge(&Config::default());
        assert_eq!(cfg, PipelineConfig::default());
    }

    #[test]
    fn test_args_underscore_flags() {
        let args = Args::parse_from([
            "asciify",
            "--input", "cat.png",
            "--resize_output", "r.png",
            "--gray_output", "g.png",
            "--ascii_output", "a.txt",
            "--html_output", "h.html",
            "--image_output", "i.png",
        ]);
        let cfg = args.merge(&Config::default());
        assert_eq!(cfg.input, PathBuf::from("cat.png"));
        assert_eq!(cfg.resize_output, PathBuf::from("r.png"));
        assert_eq!(cfg.gray_output, PathBuf::from("g.png"));
        assert_eq!(cfg.ascii_output, PathBuf::from("a.txt"));
        assert_eq!(cfg.html_output, PathBuf::from("h.html"));
        assert_eq!(cfg.image_output, PathBuf::from("i.png"));
        assert_eq!(cfg.target_width, 200);
    }

    #[test]
    fn test_flags_override_file() {
        let file: Config = toml::from_str(
            "[output]\ninput = \"file.png\"\nascii_output = \"file.txt\"\n",
        )
        .unwrap();
        let args = Args::parse_from(["asciify", "--input", "flag.png"]);
        let cfg = args.merge(&file);
        assert_eq!(cfg.input, PathBuf::from("flag.png"));
        assert_eq!(cfg.ascii_output, PathBuf::from("file.txt"));
    }

    #[test]
    fn test_args_html_color_flag() {
        let args = Args::parse_from(["asciify", "--html-color"]);
        assert!(args.merge(&Config::default()).html_color);
    }

    #[test]
    fn test_args_log_levels() {
        let args = Args::parse_from(["asciify", "-v"]);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);

        let args = Args::parse_from(["asciify", "--quiet"]);
        assert_eq!(args.log_level(), log::LevelFilter::Warn);

        assert!(Args::try_parse_from(["asciify", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_args_config_option() {
        let args = Args::parse_from(["asciify", "-c", "/tmp/asciify.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/asciify.toml")));
    }

    #[test]
    fn test_target_width_not_a_flag() {
        assert!(Args::try_parse_from(["asciify", "--target-width", "80"]).is_err());
    }
}
