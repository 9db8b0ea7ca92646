#![forbid(unsafe_code)]

//! Segmentation of a decorated text into uniformly decorated runs

use super::DecoratedText;
use crate::decoration::Decoration;
use std::ops::Range;

/// A maximal stretch of text over which the set of active decorations
/// does not change
#[derive(Debug, Clone, PartialEq)]
pub struct Run<'a> {
    pub text: &'a str,
    pub range: Range<usize>,
    /// Active decorations, in the order they were applied
    pub decorations: Vec<&'a Decoration>,
}

impl DecoratedText {
    /// Split the text into runs at every decoration boundary.
    ///
    /// Runs cover the whole text without gaps. Empty decorations never
    /// appear in a run.
    pub fn runs(&self) -> Vec<Run<'_>> {
        let mut bounds: Vec<usize> = self
            .decorations()
            .flat_map(|(range, _)| [range.start, range.end])
            .chain([0, self.len()])
            .collect();
        bounds.sort_unstable();
        bounds.dedup();

        bounds
            .windows(2)
            .map(|pair| {
                let range = pair[0]..pair[1];
                let decorations = self
                    .decorations()
                    .filter(|(span, _)| span.start <= range.start && span.end >= range.end)
                    .map(|(_, decoration)| decoration)
                    .collect();
                Run {
                    text: &self.as_str()[range.clone()],
                    range,
                    decorations,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoration::CharacterStyle;

    #[test]
    fn test_runs_cover_text() {
        let mut text = DecoratedText::new("Hello world");
        text.decorate(0..5, CharacterStyle::Underline.into()).unwrap();
        text.decorate(3..8, CharacterStyle::Strikethrough.into()).unwrap();

        let runs = text.runs();
        let pieces: Vec<(&str, usize)> = runs.iter().map(|r| (r.text, r.decorations.len())).collect();
        assert_eq!(
            pieces,
            vec![("Hel", 1), ("lo", 2), (" wo", 1), ("rld", 0)]
        );
    }

    #[test]
    fn test_runs_plain_and_empty() {
        let text = DecoratedText::new("plain");
        let runs = text.runs();
        assert_eq!(runs.len(), 1);
        assert!(runs[0].decorations.is_empty());

        assert!(DecoratedText::default().runs().is_empty());
    }
}
