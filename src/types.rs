#![forbid(unsafe_code)]

//! Core value types for spanx
//!
//! Colors, text styles, alignments and the unit helpers used when sizing
//! decorations.

use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ARGB color, `0xAARRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const DKGRAY: Color = Color(0xFF44_4444);
    pub const GRAY: Color = Color(0xFF88_8888);
    pub const LTGRAY: Color = Color(0xFFCC_CCCC);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);
    pub const YELLOW: Color = Color(0xFFFF_FF00);
    pub const CYAN: Color = Color(0xFF00_FFFF);
    pub const MAGENTA: Color = Color(0xFFFF_00FF);
    pub const TRANSPARENT: Color = Color(0);

    /// Creates a color from a packed `0xAARRGGBB` value
    pub const fn from_argb(argb: u32) -> Self {
        Color(argb)
    }

    /// Creates an opaque color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Returns the packed `0xAARRGGBB` value
    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Parses `#RRGGBB`, `#AARRGGBB` or a color name
    ///
    /// Names are matched case-insensitively: black, darkgray, gray,
    /// lightgray, white, red, green, blue, yellow, cyan, magenta, aqua,
    /// fuchsia, darkgrey, grey, lightgrey, lime, maroon, navy, olive,
    /// purple, silver, teal.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::Invalid` for anything else.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        if let Some(hex) = s.strip_prefix('#') {
            let value = u32::from_str_radix(hex, 16)
                .ok()
                .filter(|_| hex.chars().all(|c| c.is_ascii_hexdigit()));
            return match (hex.len(), value) {
                (6, Some(rgb)) => Ok(Color(0xFF00_0000 | rgb)),
                (8, Some(argb)) => Ok(Color(argb)),
                _ => Err(ColorError::Invalid(s.to_string())),
            };
        }

        let argb = match s.to_ascii_lowercase().as_str() {
            "black" => 0xFF00_0000,
            "darkgray" | "darkgrey" => 0xFF44_4444,
            "gray" | "grey" => 0xFF88_8888,
            "lightgray" | "lightgrey" => 0xFFCC_CCCC,
            "white" => 0xFFFF_FFFF,
            "red" => 0xFFFF_0000,
            "green" | "lime" => 0xFF00_FF00,
            "blue" => 0xFF00_00FF,
            "yellow" => 0xFFFF_FF00,
            "cyan" | "aqua" => 0xFF00_FFFF,
            "magenta" | "fuchsia" => 0xFFFF_00FF,
            "maroon" => 0xFF80_0000,
            "navy" => 0xFF00_0080,
            "olive" => 0xFF80_8000,
            "purple" => 0xFF80_0080,
            "silver" => 0xFFC0_C0C0,
            "teal" => 0xFF00_8080,
            _ => return Err(ColorError::Invalid(s.to_string())),
        };
        Ok(Color(argb))
    }

    /// Parses a color string, substituting `fallback` when it is malformed
    ///
    /// The substitution is logged at warn level so a bad color string in
    /// caller code stays visible.
    pub fn parse_or(s: &str, fallback: Color) -> Self {
        match Self::parse(s) {
            Ok(color) => color,
            Err(e) => {
                log::warn!("{e}, using fallback color {fallback}");
                fallback
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color(argb)
    }
}

/// Typeface style of a character run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl TextStyle {
    pub fn is_bold(self) -> bool {
        matches!(self, TextStyle::Bold | TextStyle::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, TextStyle::Italic | TextStyle::BoldItalic)
    }
}

/// Paragraph alignment relative to the layout direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Normal,
    Opposite,
    Center,
}

/// Vertical placement of an inline image within its line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageAlign {
    #[default]
    Center,
    Bottom,
    Baseline,
}

/// Blur mask filter styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurStyle {
    #[default]
    Normal,
    Solid,
    Outer,
    Inner,
}

/// Unit a size value is expressed in before conversion to pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionUnit {
    /// The value is already in pixels
    #[default]
    NotConvert,
    /// Scale-independent pixels
    Sp,
    /// Density-independent pixels
    Dp,
}

/// Screen density factors used for dp/sp conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DisplayMetrics {
    /// Pixels per dp
    pub density: f32,
    /// Pixels per sp, includes the user's font scale
    pub scaled_density: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            density: 1.0,
            scaled_density: 1.0,
        }
    }
}

impl DisplayMetrics {
    pub fn new(density: f32, scaled_density: f32) -> Self {
        Self {
            density,
            scaled_density,
        }
    }

    /// dp to px
    pub fn dp(&self, value: i32) -> i32 {
        to_px(value, self.density)
    }

    /// sp to px
    pub fn sp(&self, value: i32) -> i32 {
        to_px(value, self.scaled_density)
    }

    /// Converts `value` expressed in `unit` to pixels
    pub fn convert(&self, value: i32, unit: ConversionUnit) -> i32 {
        match unit {
            ConversionUnit::NotConvert => value,
            ConversionUnit::Sp => self.sp(value),
            ConversionUnit::Dp => self.dp(value),
        }
    }

    /// Builds a square [`DrawableSize`] from `size` expressed in `unit`
    pub fn drawable_size(&self, size: i32, unit: ConversionUnit) -> DrawableSize {
        DrawableSize::square(self.convert(size, unit).max(0) as u32)
    }
}

// Half is added before rounding, so exact halves round one pixel up.
fn to_px(value: i32, factor: f32) -> i32 {
    (value as f32 * factor + 0.5).round() as i32
}

/// Width and height of an image decoration, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawableSize {
    pub width: u32,
    pub height: u32,
}

impl DrawableSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Same width and height
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }
}

impl From<u32> for DrawableSize {
    fn from(size: u32) -> Self {
        Self::square(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parse_hex() {
        assert_eq!(Color::parse("#FF0000"), Ok(Color::RED));
        assert_eq!(Color::parse("#80FF0000").map(Color::argb), Ok(0x80FF_0000));
        assert_eq!(Color::parse("#00ff00"), Ok(Color::GREEN));
    }

    #[test]
    fn test_color_parse_names() {
        assert_eq!(Color::parse("blue"), Ok(Color::BLUE));
        assert_eq!(Color::parse("Grey"), Ok(Color::GRAY));
        assert_eq!(Color::parse("teal"), Ok(Color::rgb(0, 0x80, 0x80)));
    }

    #[test]
    fn test_color_parse_invalid() {
        assert!(Color::parse("").is_err());
        assert!(Color::parse("#FFF").is_err());
        assert!(Color::parse("#GG0000").is_err());
        assert!(Color::parse("#+F0000").is_err());
        assert!(Color::parse("not-a-color").is_err());
    }

    #[test]
    fn test_color_parse_or_falls_back() {
        assert_eq!(Color::parse_or("oops", Color::RED), Color::RED);
        assert_eq!(Color::parse_or("#0000FF", Color::RED), Color::BLUE);
    }

    #[test]
    fn test_color_channels_and_display() {
        let color = Color::from_argb(0x8012_3456);
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.red(), 0x12);
        assert_eq!(color.green(), 0x34);
        assert_eq!(color.blue(), 0x56);
        assert_eq!(color.to_string(), "#80123456");
    }

    #[test]
    fn test_unit_conversion() {
        let metrics = DisplayMetrics::new(2.0, 3.0);
        assert_eq!(metrics.dp(10), 21);
        assert_eq!(metrics.sp(10), 31);
        assert_eq!(metrics.convert(10, ConversionUnit::NotConvert), 10);
        assert_eq!(metrics.drawable_size(4, ConversionUnit::Dp), DrawableSize::square(9));
    }

    #[test]
    fn test_text_style_flags() {
        assert!(TextStyle::BoldItalic.is_bold());
        assert!(TextStyle::BoldItalic.is_italic());
        assert!(!TextStyle::Normal.is_bold());
        assert!(TextStyle::Italic.is_italic());
    }
}
