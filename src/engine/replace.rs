#![forbid(unsafe_code)]

//! Single-pass match replacement over a decorated text

use crate::decoration::Decoration;
use crate::rules::{Pattern, RuleMatch};
use crate::text::DecoratedText;
use std::ops::Range;

/// What to do with one match
#[derive(Debug, Clone, PartialEq)]
pub enum Replacement {
    /// Keep the matched text and decorate it
    Decorate(Decoration),
    /// Swap the matched text for a (possibly decorated) text
    Substitute(DecoratedText),
}

/// Run `f` on every match of `pattern` in `text` and apply what it returns.
///
/// Matches are located on the text as it was before the pass, then applied
/// left to right. Returning `None` leaves a match untouched. Decorations
/// already on `text` are kept and moved along with substitutions.
pub fn replace_matches<F>(mut text: DecoratedText, pattern: &Pattern, mut f: F) -> DecoratedText
where
    F: FnMut(&RuleMatch<'_>) -> Option<Replacement>,
{
    let edits: Vec<(Range<usize>, Replacement)> = pattern
        .find_all(text.as_str())
        .iter()
        .filter_map(|m| f(m).map(|replacement| (m.range(), replacement)))
        .collect();

    let mut shift: isize = 0;
    for (range, replacement) in edits {
        let start = range.start.saturating_add_signed(shift);
        let end = range.end.saturating_add_signed(shift);

        let result = match replacement {
            Replacement::Decorate(decoration) => text.decorate(start..end, decoration),
            Replacement::Substitute(substitute) => {
                let inserted = substitute.len();
                text.splice(start..end, substitute).map(|()| {
                    shift += inserted as isize - (end - start) as isize;
                })
            }
        };

        if let Err(e) = result {
            log::warn!("Skipping match of '{}': {}", pattern.as_str(), e);
        }
    }

    text
}
