#![forbid(unsafe_code)]

//! Scoped builder
//!
//! A scope owns an optional text and a buffer. Decoration calls apply to
//! the owned text; [`SpanDsl::text`] and [`SpanDsl::span`] append to the
//! buffer. The scope's result is the owned text followed by the buffer.

use super::Decorate;
use crate::config::Config;
use crate::decoration::{CharacterStyle, Decoration, ImageSpec, ParagraphStyle};
use crate::engine::apply_decoration;
use crate::rules::RuleSet;
use crate::text::DecoratedText;

#[derive(Debug, Default)]
pub struct SpanDsl {
    config: Config,
    own: Option<DecoratedText>,
    rules: RuleSet,
    buffer: DecoratedText,
}

impl SpanDsl {
    /// A root scope with no text of its own
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// A scope owning `text`, decorated through `rules`
    pub fn scoped(config: Config, text: impl Into<DecoratedText>, rules: impl Into<RuleSet>) -> Self {
        Self {
            config,
            own: Some(text.into()),
            rules: rules.into(),
            buffer: DecoratedText::default(),
        }
    }

    /// Append undecorated text.
    pub fn text(&mut self, text: impl Into<DecoratedText>) -> &mut Self {
        self.buffer.append(text.into());
        self
    }

    /// Append `text`, decorated by `f` in a child scope that shares this
    /// scope's rules.
    pub fn span(&mut self, text: impl Into<DecoratedText>, f: impl FnOnce(&mut SpanDsl)) -> &mut Self {
        self.span_matching(text, RuleSet::None, f)
    }

    /// Append `text`, decorated by `f` in a child scope using `rules`.
    ///
    /// `RuleSet::None` inherits this scope's rules.
    pub fn span_matching(
        &mut self,
        text: impl Into<DecoratedText>,
        rules: impl Into<RuleSet>,
        f: impl FnOnce(&mut SpanDsl),
    ) -> &mut Self {
        let rules = match rules.into() {
            RuleSet::None => self.rules.clone(),
            rules => rules,
        };
        let mut child = SpanDsl::scoped(self.config.clone(), text, rules);
        f(&mut child);
        self.buffer.append(child.finish());
        self
    }

    /// Append `lines` line breaks (at least one).
    pub fn newline(&mut self, lines: usize) -> &mut Self {
        self.buffer.push_str(&"\n".repeat(lines.max(1)));
        self
    }

    pub fn finish(self) -> DecoratedText {
        match self.own {
            Some(mut own) => {
                own.append(self.buffer);
                own
            }
            None => self.buffer,
        }
    }
}

impl Decorate for SpanDsl {
    fn decorate_with(&mut self, make: &mut dyn FnMut(&str) -> Decoration) -> &mut Self {
        if let Some(own) = &mut self.own {
            let text = std::mem::take(own);
            *own = apply_decoration(text, &self.rules, &mut *make);
        }
        self
    }

    fn decorate_paragraph(&mut self, style: ParagraphStyle) -> &mut Self {
        if let Some(own) = &mut self.own {
            own.decorate_all(style.into());
        }
        self
    }

    fn decorate_image(&mut self, image: ImageSpec) -> &mut Self {
        if self.own.is_some() && !self.rules.is_empty() {
            return self.decorate_with(&mut |_| CharacterStyle::Image(image.clone()).into());
        }
        let mut placeholder = DecoratedText::new(self.config.images.placeholder.as_str());
        placeholder.decorate_all(CharacterStyle::Image(image).into());
        self.buffer.append(placeholder);
        self
    }

    fn config(&self) -> &Config {
        &self.config
    }
}

/// Build a decorated text in a root scope with the default config.
///
/// ```
/// use spanx::{Color, Decorate, spannable};
///
/// let text = spannable(|s| {
///     s.text("Hi ");
///     s.span("there", |c| {
///         c.color(Color::BLUE);
///     });
/// });
/// assert_eq!(text.as_str(), "Hi there");
/// ```
pub fn spannable(f: impl FnOnce(&mut SpanDsl)) -> DecoratedText {
    let mut dsl = SpanDsl::new(Config::default());
    f(&mut dsl);
    dsl.finish()
}

/// Build a decorated text in a scope owning `text` with `rules`.
pub fn spannable_from(
    text: impl Into<DecoratedText>,
    rules: impl Into<RuleSet>,
    f: impl FnOnce(&mut SpanDsl),
) -> DecoratedText {
    let mut dsl = SpanDsl::scoped(Config::default(), text, rules);
    f(&mut dsl);
    dsl.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn ranges(text: &DecoratedText) -> Vec<std::ops::Range<usize>> {
        text.decorations().map(|(r, _)| r.clone()).collect()
    }

    #[test]
    fn test_own_text_precedes_buffer() {
        let text = spannable_from("head", (), |s| {
            s.text(" tail");
            s.color(Color::RED);
        });
        assert_eq!(text.as_str(), "head tail");
        assert_eq!(ranges(&text), vec![0..4]);
    }

    #[test]
    fn test_child_inherits_rules() {
        let text = spannable_from("", "o", |s| {
            s.span("foo", |c| {
                c.underline();
            });
            s.span_matching("boo", "b", |c| {
                c.underline();
            });
        });
        assert_eq!(text.as_str(), "fooboo");
        assert_eq!(ranges(&text), vec![1..2, 2..3, 3..4]);
    }

    #[test]
    fn test_image_placeholder_in_root() {
        let text = spannable(|s| {
            s.text("a");
            s.image(ImageSpec::resource(7));
            s.newline(1);
        });
        assert_eq!(text.as_str(), "a \n");
        assert_eq!(ranges(&text), vec![1..2]);
    }

    #[test]
    fn test_root_decoration_is_noop() {
        let text = spannable(|s| {
            s.text("plain");
            s.bold();
        });
        assert_eq!(text.decorations_len(), 0);
    }
}
