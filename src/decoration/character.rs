#![forbid(unsafe_code)]

//! Character-level decorations

use crate::types::{BlurStyle, Color, DrawableSize, ImageAlign, TextStyle};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Suggestion flags used when none are given: easy-correct | auto-correction
pub const DEFAULT_SUGGESTION_FLAGS: u32 = 0x1 | 0x4;

/// Character decorations
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CharacterStyle {
    Style {
        style: TextStyle,
    },
    Typeface {
        family: String,
    },
    TextAppearance {
        style: TextStyle,
        /// Text size in pixels, `None` keeps the widget's size
        size: Option<u32>,
        color: Option<Color>,
        family: Option<String>,
        link_color: Option<Color>,
    },
    Foreground {
        color: Color,
    },
    Background {
        color: Color,
    },
    Image(ImageSpec),
    ScaleX {
        proportion: f32,
    },
    BlurMask {
        radius: f32,
        style: BlurStyle,
    },
    Superscript,
    Subscript,
    AbsoluteSize {
        size: u32,
        /// `size` is in dp rather than pixels
        dip: bool,
    },
    RelativeSize {
        proportion: f32,
    },
    Strikethrough,
    Underline,
    Url {
        url: String,
    },
    Suggestion {
        suggestions: Vec<String>,
        flags: u32,
        locale: Option<String>,
    },
    Clickable(ClickableSpec),
    /// Host-defined decoration the crate carries without interpreting
    Custom {
        tag: String,
        payload: serde_json::Value,
    },
}

impl CharacterStyle {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            CharacterStyle::Style { .. } => "style",
            CharacterStyle::Typeface { .. } => "typeface",
            CharacterStyle::TextAppearance { .. } => "text-appearance",
            CharacterStyle::Foreground { .. } => "foreground",
            CharacterStyle::Background { .. } => "background",
            CharacterStyle::Image(_) => "image",
            CharacterStyle::ScaleX { .. } => "scale-x",
            CharacterStyle::BlurMask { .. } => "blur-mask",
            CharacterStyle::Superscript => "superscript",
            CharacterStyle::Subscript => "subscript",
            CharacterStyle::AbsoluteSize { .. } => "absolute-size",
            CharacterStyle::RelativeSize { .. } => "relative-size",
            CharacterStyle::Strikethrough => "strikethrough",
            CharacterStyle::Underline => "underline",
            CharacterStyle::Url { .. } => "url",
            CharacterStyle::Suggestion { .. } => "suggestion",
            CharacterStyle::Clickable(_) => "clickable",
            CharacterStyle::Custom { .. } => "custom",
        }
    }
}

/// Where an inline image comes from
///
/// Loading is left to the host. A `Remote` image is drawn as a placeholder
/// until the host's loader swaps the real bitmap in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ImageSource {
    /// Packaged resource id
    Resource(u32),
    /// Local content or file uri
    Uri(String),
    /// Network url fetched by the host's image loader
    Remote(String),
}

/// Inline image decoration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageSpec {
    pub source: ImageSource,
    pub size: Option<DrawableSize>,
    pub margin_left: Option<i32>,
    pub margin_right: Option<i32>,
    pub align: ImageAlign,
    /// Animation loops for remote animated images, `None` loops forever
    pub loop_count: Option<u32>,
}

impl ImageSpec {
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            size: None,
            margin_left: None,
            margin_right: None,
            align: ImageAlign::default(),
            loop_count: None,
        }
    }

    pub fn resource(id: u32) -> Self {
        Self::new(ImageSource::Resource(id))
    }

    pub fn uri(uri: impl Into<String>) -> Self {
        Self::new(ImageSource::Uri(uri.into()))
    }

    pub fn remote(url: impl Into<String>) -> Self {
        Self::new(ImageSource::Remote(url.into()))
    }

    pub fn size(mut self, size: impl Into<DrawableSize>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Horizontal margins; an unset side is treated as zero by the host
    pub fn margins(mut self, left: i32, right: i32) -> Self {
        self.margin_left = Some(left);
        self.margin_right = Some(right);
        self
    }

    pub fn align(mut self, align: ImageAlign) -> Self {
        self.align = align;
        self
    }

    pub fn loop_count(mut self, count: u32) -> Self {
        self.loop_count = Some(count);
        self
    }
}

/// Callback run when a clickable range is tapped, receives the matched text
#[derive(Clone)]
pub struct ClickHandler(Arc<dyn Fn(&str) + Send + Sync>);

impl ClickHandler {
    pub fn new(f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        ClickHandler(Arc::new(f))
    }

    pub fn call(&self, text: &str) {
        (self.0)(text);
    }
}

impl fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClickHandler(<fn>)")
    }
}

impl PartialEq for ClickHandler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Clickable region decoration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClickableSpec {
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub style: Option<TextStyle>,
    pub underline: Option<bool>,
    /// Text the region was created for, handed to the handler on click
    pub matched: String,
    #[serde(skip)]
    pub handler: Option<ClickHandler>,
}

impl ClickableSpec {
    pub fn new(matched: impl Into<String>) -> Self {
        Self {
            color: None,
            background: None,
            style: None,
            underline: None,
            matched: matched.into(),
            handler: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Called with [`ClickableSpec::matched`] on every click
    pub fn on_click(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.handler = Some(ClickHandler::new(f));
        self
    }

    /// Dispatches a click on this region to its handler
    pub fn click(&self) {
        if let Some(handler) = &self.handler {
            handler.call(&self.matched);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_click_passes_matched_text() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut spec = ClickableSpec::new("link");
        spec.handler = Some(ClickHandler::new(move |text| {
            sink.lock().unwrap().push(text.to_string());
        }));
        spec.click();
        spec.click();

        assert_eq!(*seen.lock().unwrap(), vec!["link", "link"]);
    }

    #[test]
    fn test_click_without_handler_is_noop() {
        ClickableSpec::new("plain").click();
    }

    #[test]
    fn test_handler_equality_is_identity() {
        let a = ClickHandler::new(|_| {});
        let b = a.clone();
        let c = ClickHandler::new(|_| {});
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_image_spec_builder() {
        let spec = ImageSpec::remote("https://example.com/a.gif")
            .size(24)
            .margins(2, 4)
            .align(ImageAlign::Baseline)
            .loop_count(3);

        assert_eq!(spec.size, Some(DrawableSize::square(24)));
        assert_eq!(spec.margin_left, Some(2));
        assert_eq!(spec.margin_right, Some(4));
        assert_eq!(spec.align, ImageAlign::Baseline);
        assert_eq!(spec.loop_count, Some(3));
    }
}
