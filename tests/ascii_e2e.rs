//! End-to-end tests for the conversion pipeline.
//!
//! Each test writes a real PNG into a temporary directory, runs the whole
//! pipeline against it and inspects the files it produced.

use asciify::config::PipelineConfig;
use asciify::pipeline::run;
use asciify::AsciiError;
use image::{GrayImage, Luma, Rgba, RgbaImage};
use std::path::Path;
use tempfile::TempDir;

/// Config with every path inside `dir`.
fn config_in(dir: &Path) -> PipelineConfig {
    PipelineConfig {
        input: dir.join("input.png"),
        resize_output: dir.join("resize.png"),
        gray_output: dir.join("gray.png"),
        ascii_output: dir.join("result.txt"),
        html_output: dir.join("result.html"),
        image_output: dir.join("output.png"),
        ..PipelineConfig::default()
    }
}

fn write_uniform_input(path: &Path, width: u32, height: u32, value: u8) {
    RgbaImage::from_pixel(width, height, Rgba([value, value, value, 255]))
        .save(path)
        .unwrap();
}

#[test]
fn test_pipeline_mid_gray_scenario() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    write_uniform_input(&config.input, 100, 100, 128);

    let report = run(&config).unwrap();
    assert_eq!(report.source_size, (100, 100));
    assert_eq!(report.resized_size, (200, 200));
    assert_eq!(report.grid_size, (200, 100));
    assert_eq!(report.written.len(), 5);

    let text = std::fs::read_to_string(&config.ascii_output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 100);
    assert!(text.ends_with('\n'));
    for line in lines {
        assert_eq!(line, "*".repeat(200));
    }
}

#[test]
fn test_pipeline_writes_intermediates() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    RgbaImage::from_fn(80, 40, |x, y| Rgba([(x * 3) as u8, (y * 6) as u8, 40, 255]))
        .save(&config.input)
        .unwrap();

    run(&config).unwrap();

    let resized = image::open(&config.resize_output).unwrap().to_rgba8();
    assert_eq!(resized.dimensions(), (200, 100));

    let gray = image::open(&config.gray_output).unwrap().to_rgba8();
    assert_eq!(gray.dimensions(), (200, 100));
    assert!(gray.pixels().all(|p| p.0[0] == p.0[1] && p.0[1] == p.0[2]));
}

#[test]
fn test_pipeline_html_and_raster_outputs() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    write_uniform_input(&config.input, 50, 50, 0);

    run(&config).unwrap();

    let html = std::fs::read_to_string(&config.html_output).unwrap();
    assert_eq!(html.matches("<br>").count(), 100);
    assert_eq!(html.matches("<span>$</span>").count(), 200 * 100);
    assert!(!html.contains("rgb("));

    let raster = image::open(&config.image_output).unwrap();
    assert_eq!(raster.width(), 1400);
    assert_eq!(raster.height(), 100 * 11);
}

#[test]
fn test_pipeline_color_html() {
    let dir = TempDir::new().unwrap();
    let config = PipelineConfig {
        html_color: true,
        ..config_in(dir.path())
    };
    RgbaImage::from_pixel(20, 20, Rgba([200, 10, 10, 255]))
        .save(&config.input)
        .unwrap();

    run(&config).unwrap();

    let html = std::fs::read_to_string(&config.html_output).unwrap();
    assert!(html.contains("rgb(200,10,10)"));
}

#[test]
fn test_pipeline_grayscale_source() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    GrayImage::from_fn(100, 50, |x, y| Luma([((x + y) % 256) as u8]))
        .save(&config.input)
        .unwrap();

    let report = run(&config).unwrap();
    assert_eq!(report.resized_size, (200, 100));

    let text = std::fs::read_to_string(&config.ascii_output).unwrap();
    assert_eq!(text.lines().count(), report.grid_size.1);
    assert!(text.lines().all(|l| l.chars().count() == 200));
}

#[test]
fn test_pipeline_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    RgbaImage::from_fn(64, 48, |x, y| Rgba([(x * 4) as u8, (y * 5) as u8, (x ^ y) as u8, 255]))
        .save(&config.input)
        .unwrap();

    run(&config).unwrap();
    let first = std::fs::read(&config.ascii_output).unwrap();
    run(&config).unwrap();
    let second = std::fs::read(&config.ascii_output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_pipeline_width_one_gives_empty_outputs() {
    let dir = TempDir::new().unwrap();
    let config = PipelineConfig {
        target_width: 1,
        ..config_in(dir.path())
    };
    write_uniform_input(&config.input, 10, 10, 200);

    let report = run(&config).unwrap();
    assert_eq!(report.grid_size, (1, 0));

    let text = std::fs::read_to_string(&config.ascii_output).unwrap();
    assert!(text.is_empty());
    let html = std::fs::read_to_string(&config.html_output).unwrap();
    assert!(html.contains("</html>"));
    let raster = image::open(&config.image_output).unwrap();
    assert_eq!((raster.width(), raster.height()), (1400, 1));
}

// ==================== Error Tests ====================

#[test]
fn test_pipeline_missing_input() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());

    let err = run(&config).unwrap_err();
    assert!(matches!(err, AsciiError::FileNotFound { .. }));
    assert!(!config.resize_output.exists());
}

#[test]
fn test_pipeline_corrupt_input() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.input, [0x89, b'P', b'N', b'G', 0, 0, 0]).unwrap();

    let err = run(&config).unwrap_err();
    assert!(matches!(err, AsciiError::DecodeError { .. }));
}

#[test]
fn test_pipeline_unwritable_output_stops_run() {
    let dir = TempDir::new().unwrap();
    let config = PipelineConfig {
        ascii_output: dir.path().join("no-such-dir").join("result.txt"),
        ..config_in(dir.path())
    };
    write_uniform_input(&config.input, 10, 10, 50);

    let err = run(&config).unwrap_err();
    assert!(matches!(err, AsciiError::WriteError { .. }));
    // Intermediates before the failure were written, later outputs were not.
    assert!(config.gray_output.exists());
    assert!(!config.html_output.exists());
}
