//! Integration tests for configuration parsing
//!
//! Loads spanx.toml files from fixtures and temporary directories and
//! checks that the parsed values reach the builders.

#[macro_use]
mod common;

use common::{TestResult, fixture_path};
use spanx::config::{ColorOption, OutputFormat};
use spanx::decoration::{CharacterStyle, ImageSource};
use spanx::types::{Color, ConversionUnit, DrawableSize};
use spanx::{Config, ConfigError, Decorate, SpanBuilder};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_load_valid_minimal() -> TestResult {
    let config = Config::load(fixture_path("config", "valid_minimal.toml"))?;
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
fn test_config_load_valid_full() -> TestResult {
    let config = Config::load(fixture_path("config", "valid_full.toml"))?;

    assert_eq!(config.display.density, 2.0);
    assert_eq!(config.display.scaled_density, 3.0);
    assert_eq!(config.colors.fallback, Color::BLUE);
    assert!(!config.colors.strict);
    assert_eq!(config.images.placeholder, "\u{FFFC}");
    assert_eq!(config.output.format, OutputFormat::Jsonl);
    assert_eq!(config.output.color, ColorOption::Never);
    Ok(())
}

#[test]
fn test_config_load_invalid_version() {
    let result = Config::load(fixture_path("config", "invalid_version.toml"));
    let err_msg = assert_some!(result.err()).to_string();
    assert!(err_msg.contains("Unsupported configuration version"));
}

#[test]
fn test_config_load_missing_file() {
    let result = Config::load(fixture_path("config", "nope.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_config_load_malformed() -> TestResult {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("spanx.toml");
    fs::write(&path, "[display\ndensity = 2.0")?;

    let result = Config::load(&path);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
    Ok(())
}

#[test]
fn test_config_rejects_non_positive_density() -> TestResult {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("spanx.toml");
    fs::write(&path, "[display]\nscaled-density = 0.0\n")?;

    let result = Config::load(&path);
    assert!(matches!(result, Err(ConfigError::Validation(msg)) if msg.contains("scaled-density")));
    Ok(())
}

#[test]
fn test_loaded_config_drives_builder() -> TestResult {
    let config = Config::load(fixture_path("config", "valid_full.toml"))?;
    let text = SpanBuilder::with_config(config)
        .text("bad ")
        .color_str("no-such-color")
        .image_sized(ImageSource::Resource(1), 8, ConversionUnit::Sp)
        .build();

    assert_eq!(text.as_str(), "bad \u{FFFC}");
    let styles: Vec<&CharacterStyle> = text
        .decorations()
        .filter_map(|(_, d)| d.as_character())
        .collect();
    assert_eq!(styles[0], &CharacterStyle::Foreground { color: Color::BLUE });
    match styles[1] {
        CharacterStyle::Image(spec) => assert_eq!(spec.size, Some(DrawableSize::square(25))),
        other => panic!("expected image, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_strict_config_fixture() -> TestResult {
    let config = Config::load(fixture_path("config", "strict_colors.toml"))?;
    assert!(config.colors.strict);

    let text = SpanBuilder::with_config(config)
        .text("x")
        .quote_str("nope")
        .line_background_str("silver")
        .build();
    assert_eq!(text.decorations_len(), 1);
    Ok(())
}
