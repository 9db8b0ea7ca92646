#![forbid(unsafe_code)]

//! Decoration kinds attached to ranges of a [`DecoratedText`]
//!
//! Decorations only describe what the host toolkit should draw or do for a
//! range. Character decorations change how glyphs look or behave;
//! paragraph decorations apply to whole paragraphs and never take part in
//! match-rule placement.
//!
//! [`DecoratedText`]: crate::text::DecoratedText

mod character;
mod paragraph;

pub use character::{
    CharacterStyle, ClickHandler, ClickableSpec, DEFAULT_SUGGESTION_FLAGS, ImageSource, ImageSpec,
};
pub use paragraph::{ParagraphImage, ParagraphStyle};

use serde::Serialize;

/// A style or behavior bound to a character range
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Decoration {
    Character(CharacterStyle),
    Paragraph(ParagraphStyle),
}

impl Decoration {
    /// Short stable name of the decoration kind, e.g. `"foreground"`
    pub fn kind(&self) -> &'static str {
        match self {
            Decoration::Character(style) => style.kind(),
            Decoration::Paragraph(style) => style.kind(),
        }
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, Decoration::Paragraph(_))
    }

    pub fn as_character(&self) -> Option<&CharacterStyle> {
        match self {
            Decoration::Character(style) => Some(style),
            Decoration::Paragraph(_) => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&ParagraphStyle> {
        match self {
            Decoration::Paragraph(style) => Some(style),
            Decoration::Character(_) => None,
        }
    }
}

impl From<CharacterStyle> for Decoration {
    fn from(style: CharacterStyle) -> Self {
        Decoration::Character(style)
    }
}

impl From<ParagraphStyle> for Decoration {
    fn from(style: ParagraphStyle) -> Self {
        Decoration::Paragraph(style)
    }
}
