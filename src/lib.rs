#![forbid(unsafe_code)]

//! spanx: decorated text built from match rules
//!
//! spanx attaches character and paragraph decorations to parts of a text
//! picked out by literal, regex or structured match rules, through either
//! a chained builder ([`SpanBuilder`]) or a scoped one ([`spannable`]).
//! Drawing the result is left to the host toolkit.

pub mod builder;
pub mod config;
pub mod decoration;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod text;
pub mod types;

// Re-export error types for convenient access
pub use error::{ColorError, ConfigError, RuleError, SpanError, TextError};

// Re-export core domain types for convenient access
pub use builder::{Decorate, SpanBuilder, SpanDsl, spannable, spannable_from};
pub use config::Config;
pub use decoration::{CharacterStyle, Decoration, ImageSource, ImageSpec, ParagraphStyle};
pub use engine::{Replacement, apply_decoration, replace_matches};
pub use rules::{MatchRule, Pattern, RuleMatch, RuleSet};
pub use text::DecoratedText;
pub use types::{Color, ConversionUnit, DisplayMetrics, DrawableSize, TextStyle};
