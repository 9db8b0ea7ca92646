#![forbid(unsafe_code)]

//! Chained builder
//!
//! ```
//! use spanx::{Color, Decorate, SpanBuilder};
//!
//! let text = SpanBuilder::new()
//!     .text("Hello ")
//!     .color(Color::RED)
//!     .text("world")
//!     .matching("o")
//!     .underline()
//!     .build();
//! assert_eq!(text.as_str(), "Hello world");
//! ```

use super::Decorate;
use crate::config::Config;
use crate::decoration::{CharacterStyle, Decoration, ImageSpec, ParagraphStyle};
use crate::engine::apply_decoration;
use crate::rules::RuleSet;
use crate::text::DecoratedText;

#[derive(Debug)]
struct Pending {
    text: DecoratedText,
    rules: RuleSet,
}

/// Builds a decorated text one fragment at a time
///
/// Decoration calls apply to the most recent [`SpanBuilder::text`]
/// fragment until the next one starts.
#[derive(Debug, Default)]
pub struct SpanBuilder {
    config: Config,
    fragments: Vec<DecoratedText>,
    pending: Option<Pending>,
}

impl SpanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Start a new fragment, keeping the previous one.
    pub fn text(&mut self, text: impl Into<DecoratedText>) -> &mut Self {
        self.save();
        self.pending = Some(Pending {
            text: text.into(),
            rules: RuleSet::None,
        });
        self
    }

    /// Append `lines` line breaks (at least one) to the current fragment,
    /// or to the output when there is none.
    pub fn newline(&mut self, lines: usize) -> &mut Self {
        let newlines = "\n".repeat(lines.max(1));
        match &mut self.pending {
            Some(pending) => pending.text.push_str(&newlines),
            None => self.fragments.push(DecoratedText::new(newlines)),
        }
        self
    }

    /// Rules for the following character decorations of this fragment
    pub fn matching(&mut self, rules: impl Into<RuleSet>) -> &mut Self {
        match &mut self.pending {
            Some(pending) => pending.rules = rules.into(),
            None => log::debug!("matching() called with no text fragment, ignored"),
        }
        self
    }

    /// Move the current fragment into the output.
    ///
    /// Only needed to stop further decoration calls from reaching it.
    pub fn save(&mut self) -> &mut Self {
        if let Some(pending) = self.pending.take()
            && !pending.text.is_empty()
        {
            self.fragments.push(pending.text);
        }
        self
    }

    /// Concatenate everything built so far and reset the builder.
    pub fn build(&mut self) -> DecoratedText {
        self.save();
        DecoratedText::concat(std::mem::take(&mut self.fragments))
    }
}

impl Decorate for SpanBuilder {
    fn decorate_with(&mut self, make: &mut dyn FnMut(&str) -> Decoration) -> &mut Self {
        if let Some(pending) = &mut self.pending {
            let text = std::mem::take(&mut pending.text);
            pending.text = apply_decoration(text, &pending.rules, &mut *make);
        }
        self
    }

    fn decorate_paragraph(&mut self, style: ParagraphStyle) -> &mut Self {
        if let Some(pending) = &mut self.pending {
            pending.text.decorate_all(style.into());
        }
        self
    }

    fn decorate_image(&mut self, image: ImageSpec) -> &mut Self {
        let has_rules = self
            .pending
            .as_ref()
            .is_some_and(|pending| !pending.rules.is_empty());

        if !has_rules {
            let placeholder = DecoratedText::new(self.config.images.placeholder.as_str());
            self.text(placeholder);
        }
        self.decorate_with(&mut |_| CharacterStyle::Image(image.clone()).into())
    }

    fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn ranges(text: &DecoratedText) -> Vec<std::ops::Range<usize>> {
        text.decorations().map(|(r, _)| r.clone()).collect()
    }

    #[test]
    fn test_decorations_follow_fragment() {
        let text = SpanBuilder::new()
            .text("ab")
            .color(Color::RED)
            .text("cd")
            .underline()
            .build();

        assert_eq!(text.as_str(), "abcd");
        assert_eq!(ranges(&text), vec![0..2, 2..4]);
    }

    #[test]
    fn test_decoration_without_text_is_noop() {
        let text = SpanBuilder::new().color(Color::RED).quote(Color::RED).build();
        assert!(text.is_empty());
        assert_eq!(text.decorations_len(), 0);
    }

    #[test]
    fn test_matching_resets_on_text() {
        let text = SpanBuilder::new()
            .text("aXa")
            .matching("a")
            .underline()
            .text("bXb")
            .underline()
            .build();

        assert_eq!(ranges(&text), vec![0..1, 2..3, 3..6]);
    }

    #[test]
    fn test_newline_placement() {
        let text = SpanBuilder::new().newline(0).text("a").newline(2).build();
        assert_eq!(text.as_str(), "\na\n\n");
    }

    #[test]
    fn test_build_resets() {
        let mut builder = SpanBuilder::new();
        builder.text("once");
        assert_eq!(builder.build().as_str(), "once");
        assert!(builder.build().is_empty());
    }
}
