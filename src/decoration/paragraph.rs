#![forbid(unsafe_code)]

//! Paragraph-level decorations

use super::character::ImageSource;
use crate::types::{Alignment, Color, DrawableSize};
use serde::Serialize;

/// Paragraph decorations
///
/// These always cover the whole fragment they are applied to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ParagraphStyle {
    /// Vertical stripe before the paragraph
    Quote {
        color: Color,
        stripe_width: u32,
        gap_width: u32,
    },
    /// Round bullet before the paragraph
    Bullet {
        color: Color,
        radius: u32,
        gap_width: i32,
    },
    Alignment {
        align: Alignment,
    },
    LineBackground {
        color: Color,
    },
    LeadingMargin {
        /// Number of leading lines that use `first_margin`
        first_lines: u32,
        first_margin: i32,
        rest_margin: i32,
    },
    LineHeight {
        height: u32,
    },
    Image(ParagraphImage),
    /// Host-defined decoration the crate carries without interpreting
    Custom {
        tag: String,
        payload: serde_json::Value,
    },
}

impl ParagraphStyle {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            ParagraphStyle::Quote { .. } => "quote",
            ParagraphStyle::Bullet { .. } => "bullet",
            ParagraphStyle::Alignment { .. } => "alignment",
            ParagraphStyle::LineBackground { .. } => "line-background",
            ParagraphStyle::LeadingMargin { .. } => "leading-margin",
            ParagraphStyle::LineHeight { .. } => "line-height",
            ParagraphStyle::Image(_) => "image",
            ParagraphStyle::Custom { .. } => "custom",
        }
    }
}

/// Image drawn at the start of a paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParagraphImage {
    pub source: ImageSource,
    /// Gap between the image and the text
    pub padding: i32,
    pub size: Option<DrawableSize>,
}

impl ParagraphImage {
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            padding: 0,
            size: None,
        }
    }

    pub fn padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    pub fn size(mut self, size: impl Into<DrawableSize>) -> Self {
        self.size = Some(size.into());
        self
    }
}
