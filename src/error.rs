//! Error types for spanx
//!
//! This module defines the error types used throughout spanx, following
//! a hierarchical structure with specific error variants for different
//! error categories.

use std::ops::Range;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration syntax
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but holds unusable values
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Rule-related errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Invalid rule definition
    #[error("Invalid rule definition: {0}")]
    InvalidDefinition(String),

    /// Invalid regex pattern
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),

    /// A rule collection whose element shape cannot be classified
    #[error(
        "Unknown replace rules: {0}. Use a list of strings, a list of regex patterns or a list of rules"
    )]
    UnsupportedRuleShape(String),
}

/// Errors raised when a decoration range does not fit the text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// `start > end`
    #[error("invalid range {}..{}: start > end", .range.start, .range.end)]
    InvalidRange { range: Range<usize> },

    /// The range reaches past the end of the text
    #[error("range {}..{} out of bounds for text of len {len}", .range.start, .range.end)]
    OutOfBounds { range: Range<usize>, len: usize },

    /// One endpoint splits a UTF-8 sequence
    #[error("range {}..{} has endpoint {index} inside a character", .range.start, .range.end)]
    NotOnCharBoundary { range: Range<usize>, index: usize },
}

/// Color string parse failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Neither `#RRGGBB`, `#AARRGGBB` nor a known color name
    #[error("Unknown color: {0:?}")]
    Invalid(String),
}

/// Top-level error type for spanx
#[derive(Debug, thiserror::Error)]
pub enum SpanError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Decoration range error
    #[error("Text error: {0}")]
    Text(#[from] TextError),

    /// Color error
    #[error("Color error: {0}")]
    Color(#[from] ColorError),
}
