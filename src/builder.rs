#![forbid(unsafe_code)]

//! Chained and scoped builders for decorated text

mod chain;
mod decorate;
mod dsl;

pub use chain::SpanBuilder;
pub use decorate::{DEFAULT_QUOTE_STRIPE_WIDTH, Decorate};
pub use dsl::{SpanDsl, spannable, spannable_from};

use crate::decoration::Decoration;
use crate::text::DecoratedText;
use std::ops::Range;

/// Join texts end to end, keeping their decorations.
pub fn concat<I>(texts: I) -> DecoratedText
where
    I: IntoIterator,
    I::Item: Into<DecoratedText>,
{
    DecoratedText::concat(texts)
}

/// Copy of `text` without the decorations matching `predicate`.
pub fn remove_decorations(
    text: &DecoratedText,
    mut predicate: impl FnMut(&Range<usize>, &Decoration) -> bool,
) -> DecoratedText {
    let mut out = text.clone();
    out.retain_decorations(|range, decoration| !predicate(range, decoration));
    out
}

/// Copy of `text` with only its paragraph decorations.
pub fn clear_character_decorations(text: &DecoratedText) -> DecoratedText {
    let mut out = text.clone();
    out.clear_character_decorations();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn test_remove_by_kind() {
        let text = SpanBuilder::new()
            .text("abc")
            .underline()
            .color(Color::RED)
            .line_height(20)
            .build();

        let out = remove_decorations(&text, |_, d| d.kind() == "underline");
        assert_eq!(out.decorations_len(), 2);
        assert_eq!(text.decorations_len(), 3);

        let out = clear_character_decorations(&text);
        assert_eq!(out.decorations_len(), 1);
        assert!(out.decorations().all(|(_, d)| d.is_paragraph()));
    }

    #[test]
    fn test_concat_texts() {
        let out = concat(["a", "b", "c"]);
        assert_eq!(out.as_str(), "abc");
    }
}
