//! Parsing and validation for spanx.toml configuration files

use crate::error::ConfigError;
use crate::types::{Color, DisplayMetrics};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration struct for spanx.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// spanx metadata
    #[serde(default)]
    pub spanx: SpanxMeta,

    /// Density factors for dp/sp conversion
    #[serde(default)]
    pub display: DisplayMetrics,

    /// Color string handling
    #[serde(default)]
    pub colors: ColorConfig,

    /// Image decoration defaults
    #[serde(default)]
    pub images: ImageConfig,

    /// Debug output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Shorthand for a default config with the given display densities
    pub fn with_display(display: DisplayMetrics) -> Self {
        Self {
            display,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.spanx.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.spanx.version
            )));
        }

        for (name, value) in [
            ("density", self.display.density),
            ("scaled-density", self.display.scaled_density),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Validation(format!(
                    "display.{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if self.images.placeholder.is_empty() {
            return Err(ConfigError::Validation(
                "images.placeholder must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// spanx metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanxMeta {
    /// Configuration version (must be "1")
    pub version: String,
}

impl Default for SpanxMeta {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
        }
    }
}

/// Color section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Used in place of a color string that does not parse
    #[serde(default = "default_fallback")]
    pub fallback: Color,

    /// Skip decorations with unparseable color strings instead of
    /// substituting the fallback
    #[serde(default)]
    pub strict: bool,
}

fn default_fallback() -> Color {
    Color::RED
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
            strict: false,
        }
    }
}

/// Image section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Text inserted to carry an image decoration that has nothing to
    /// attach to
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    " ".to_string()
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored terminal preview
    #[default]
    Preview,
    /// JSON Lines format
    Jsonl,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
