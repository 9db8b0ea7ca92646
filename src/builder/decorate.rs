#![forbid(unsafe_code)]

//! Typed decoration methods shared by both builders

use crate::config::Config;
use crate::decoration::{
    CharacterStyle, ClickableSpec, DEFAULT_SUGGESTION_FLAGS, Decoration, ImageSource, ImageSpec,
    ParagraphImage, ParagraphStyle,
};
use crate::types::{Alignment, BlurStyle, Color, ConversionUnit, TextStyle};

/// Stripe width of a quote when none is given, in pixels
pub const DEFAULT_QUOTE_STRIPE_WIDTH: u32 = 10;

/// Resolve a color string against `config`.
///
/// Lenient configs substitute the fallback color; strict configs log the
/// failure and return `None` so the caller skips the decoration.
pub(crate) fn resolve_color(config: &Config, s: &str) -> Option<Color> {
    if !config.colors.strict {
        return Some(Color::parse_or(s, config.colors.fallback));
    }
    match Color::parse(s) {
        Ok(color) => Some(color),
        Err(e) => {
            log::error!("{}, decoration skipped", e);
            None
        }
    }
}

/// Decoration methods for a builder
///
/// Implementors supply the four required methods; everything else is a
/// typed shorthand built on them. Character decorations go through
/// [`Decorate::decorate_with`] and so honor the builder's rule set.
/// Paragraph decorations always cover the whole fragment.
pub trait Decorate {
    /// Apply one character decoration per qualifying match, built from
    /// the matched text.
    fn decorate_with(&mut self, make: &mut dyn FnMut(&str) -> Decoration) -> &mut Self;

    /// Apply a paragraph decoration to the whole current fragment.
    fn decorate_paragraph(&mut self, style: ParagraphStyle) -> &mut Self;

    /// Apply an inline image, inserting a placeholder when there is no
    /// match rule to place it on.
    fn decorate_image(&mut self, image: ImageSpec) -> &mut Self;

    fn config(&self) -> &Config;

    fn decorate_character(&mut self, style: CharacterStyle) -> &mut Self {
        self.decorate_with(&mut |_| Decoration::Character(style.clone()))
    }

    fn style(&mut self, style: TextStyle) -> &mut Self {
        self.decorate_character(CharacterStyle::Style { style })
    }

    fn bold(&mut self) -> &mut Self {
        self.style(TextStyle::Bold)
    }

    fn italic(&mut self) -> &mut Self {
        self.style(TextStyle::Italic)
    }

    fn typeface(&mut self, family: &str) -> &mut Self {
        self.decorate_character(CharacterStyle::Typeface {
            family: family.to_string(),
        })
    }

    fn text_appearance(
        &mut self,
        style: TextStyle,
        size: Option<u32>,
        color: Option<Color>,
        family: Option<&str>,
        link_color: Option<Color>,
    ) -> &mut Self {
        self.decorate_character(CharacterStyle::TextAppearance {
            style,
            size,
            color,
            family: family.map(str::to_string),
            link_color,
        })
    }

    fn color(&mut self, color: Color) -> &mut Self {
        self.decorate_character(CharacterStyle::Foreground { color })
    }

    /// Foreground color from `#RRGGBB`, `#AARRGGBB` or a color name
    fn color_str(&mut self, color: &str) -> &mut Self {
        match resolve_color(self.config(), color) {
            Some(color) => self.color(color),
            None => self,
        }
    }

    fn background(&mut self, color: Color) -> &mut Self {
        self.decorate_character(CharacterStyle::Background { color })
    }

    fn background_str(&mut self, color: &str) -> &mut Self {
        match resolve_color(self.config(), color) {
            Some(color) => self.background(color),
            None => self,
        }
    }

    fn image(&mut self, image: ImageSpec) -> &mut Self {
        self.decorate_image(image)
    }

    /// Image of `size` in `unit`, converted with the configured densities
    fn image_sized(&mut self, source: ImageSource, size: i32, unit: ConversionUnit) -> &mut Self {
        let size = self.config().display.drawable_size(size, unit);
        self.decorate_image(ImageSpec::new(source).size(size))
    }

    fn scale_x(&mut self, proportion: f32) -> &mut Self {
        self.decorate_character(CharacterStyle::ScaleX { proportion })
    }

    fn blur_mask(&mut self, radius: f32, style: BlurStyle) -> &mut Self {
        self.decorate_character(CharacterStyle::BlurMask { radius, style })
    }

    fn superscript(&mut self) -> &mut Self {
        self.decorate_character(CharacterStyle::Superscript)
    }

    fn subscript(&mut self) -> &mut Self {
        self.decorate_character(CharacterStyle::Subscript)
    }

    /// Text size in px, or in dip when `dip` is set
    fn absolute_size(&mut self, size: u32, dip: bool) -> &mut Self {
        self.decorate_character(CharacterStyle::AbsoluteSize { size, dip })
    }

    fn relative_size(&mut self, proportion: f32) -> &mut Self {
        self.decorate_character(CharacterStyle::RelativeSize { proportion })
    }

    fn strikethrough(&mut self) -> &mut Self {
        self.decorate_character(CharacterStyle::Strikethrough)
    }

    fn underline(&mut self) -> &mut Self {
        self.decorate_character(CharacterStyle::Underline)
    }

    fn url(&mut self, url: &str) -> &mut Self {
        self.decorate_character(CharacterStyle::Url {
            url: url.to_string(),
        })
    }

    fn suggestion(&mut self, suggestions: &[&str]) -> &mut Self {
        self.suggestion_with(suggestions, DEFAULT_SUGGESTION_FLAGS, None)
    }

    fn suggestion_with(&mut self, suggestions: &[&str], flags: u32, locale: Option<&str>) -> &mut Self {
        self.decorate_character(CharacterStyle::Suggestion {
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            flags,
            locale: locale.map(str::to_string),
        })
    }

    /// Clickable region whose handler receives the matched text
    fn clickable(&mut self, on_click: impl Fn(&str) + Send + Sync + 'static) -> &mut Self {
        self.clickable_with(ClickableSpec::new("").on_click(on_click))
    }

    /// Clickable region styled like `template`; `matched` is filled in
    /// per match
    fn clickable_with(&mut self, template: ClickableSpec) -> &mut Self {
        self.decorate_with(&mut |matched| {
            let mut spec = template.clone();
            spec.matched = matched.to_string();
            CharacterStyle::Clickable(spec).into()
        })
    }

    fn custom(&mut self, tag: &str, payload: serde_json::Value) -> &mut Self {
        self.decorate_character(CharacterStyle::Custom {
            tag: tag.to_string(),
            payload,
        })
    }

    fn quote(&mut self, color: Color) -> &mut Self {
        self.quote_with(color, DEFAULT_QUOTE_STRIPE_WIDTH, 0)
    }

    fn quote_str(&mut self, color: &str) -> &mut Self {
        match resolve_color(self.config(), color) {
            Some(color) => self.quote(color),
            None => self,
        }
    }

    fn quote_with(&mut self, color: Color, stripe_width: u32, gap_width: u32) -> &mut Self {
        self.decorate_paragraph(ParagraphStyle::Quote {
            color,
            stripe_width,
            gap_width,
        })
    }

    fn bullet(&mut self, color: Color, radius: u32, gap_width: i32) -> &mut Self {
        self.decorate_paragraph(ParagraphStyle::Bullet {
            color,
            radius,
            gap_width,
        })
    }

    fn bullet_str(&mut self, color: &str, radius: u32, gap_width: i32) -> &mut Self {
        match resolve_color(self.config(), color) {
            Some(color) => self.bullet(color, radius, gap_width),
            None => self,
        }
    }

    fn alignment(&mut self, align: Alignment) -> &mut Self {
        self.decorate_paragraph(ParagraphStyle::Alignment { align })
    }

    fn line_background(&mut self, color: Color) -> &mut Self {
        self.decorate_paragraph(ParagraphStyle::LineBackground { color })
    }

    fn line_background_str(&mut self, color: &str) -> &mut Self {
        match resolve_color(self.config(), color) {
            Some(color) => self.line_background(color),
            None => self,
        }
    }

    fn leading_margin(&mut self, first_lines: u32, first_margin: i32, rest_margin: i32) -> &mut Self {
        self.decorate_paragraph(ParagraphStyle::LeadingMargin {
            first_lines,
            first_margin,
            rest_margin,
        })
    }

    fn line_height(&mut self, height: u32) -> &mut Self {
        self.decorate_paragraph(ParagraphStyle::LineHeight { height })
    }

    fn image_paragraph(&mut self, image: ParagraphImage) -> &mut Self {
        self.decorate_paragraph(ParagraphStyle::Image(image))
    }

    fn custom_paragraph(&mut self, tag: &str, payload: serde_json::Value) -> &mut Self {
        self.decorate_paragraph(ParagraphStyle::Custom {
            tag: tag.to_string(),
            payload,
        })
    }
}
