#![forbid(unsafe_code)]

use crate::decoration::Decoration;
use crate::error::TextError;
use std::fmt;
use std::ops::Range;

/// A string with decorations applied to byte ranges within it
///
/// Ranges may overlap and are kept in the order they were applied. Every
/// range endpoint sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecoratedText {
    text: String,
    decorations: Vec<(Range<usize>, Decoration)>,
}

impl DecoratedText {
    /// Create a `DecoratedText` with no decorations applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            decorations: Vec::new(),
        }
    }

    /// Concatenate fragments, keeping every fragment's decorations.
    pub fn concat<I>(fragments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DecoratedText>,
    {
        let mut out = Self::default();
        for fragment in fragments {
            out.append(fragment.into());
        }
        out
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Apply `decoration` to `range`.
    pub fn decorate(&mut self, range: Range<usize>, decoration: Decoration) -> Result<(), TextError> {
        self.check_range(&range)?;
        self.decorations.push((range, decoration));
        Ok(())
    }

    /// Apply `decoration` to the whole text.
    pub fn decorate_all(&mut self, decoration: Decoration) {
        self.decorations.push((0..self.text.len(), decoration));
    }

    fn check_range(&self, range: &Range<usize>) -> Result<(), TextError> {
        let len = self.text.len();
        if range.start > range.end {
            return Err(TextError::InvalidRange {
                range: range.clone(),
            });
        }
        if range.end > len {
            return Err(TextError::OutOfBounds {
                range: range.clone(),
                len,
            });
        }
        for index in [range.start, range.end] {
            if !self.text.is_char_boundary(index) {
                return Err(TextError::NotOnCharBoundary {
                    range: range.clone(),
                    index,
                });
            }
        }
        Ok(())
    }

    /// Iterate over all decorations and the ranges they apply to, in the
    /// order they were applied.
    pub fn decorations(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &Decoration)> {
        self.decorations.iter().map(|(range, decoration)| (range, decoration))
    }

    pub fn decorations_len(&self) -> usize {
        self.decorations.len()
    }

    /// Decorations covering the byte at `index`.
    pub fn decorations_at(&self, index: usize) -> impl Iterator<Item = &Decoration> {
        self.decorations
            .iter()
            .filter(move |(range, _)| range.contains(&index))
            .map(|(_, decoration)| decoration)
    }

    /// Decorations overlapping `range`.
    pub fn decorations_for_range(&self, range: Range<usize>) -> impl Iterator<Item = &Decoration> {
        self.decorations
            .iter()
            .filter(move |(span, _)| span.start < range.end && span.end > range.start)
            .map(|(_, decoration)| decoration)
    }

    /// Keep only the decorations for which `keep` returns true.
    pub fn retain_decorations(&mut self, mut keep: impl FnMut(&Range<usize>, &Decoration) -> bool) {
        self.decorations.retain(|(range, decoration)| keep(range, decoration));
    }

    /// Drop every character decoration, keeping paragraph decorations.
    pub fn clear_character_decorations(&mut self) {
        self.retain_decorations(|_, decoration| decoration.is_paragraph());
    }

    pub fn clear_decorations(&mut self) {
        self.decorations.clear();
    }

    /// Append undecorated text.
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Append `other`, moving its decorations after the current end.
    pub fn append(&mut self, other: DecoratedText) {
        let offset = self.text.len();
        self.text.push_str(&other.text);
        self.decorations.extend(
            other
                .decorations
                .into_iter()
                .map(|(range, decoration)| (range.start + offset..range.end + offset, decoration)),
        );
    }

    /// Replace `range` with `replacement`.
    ///
    /// Decorations ending at or before the start are untouched, those
    /// starting at or after the end are shifted, and those enclosing the
    /// range grow or shrink with it. A decoration that only covered
    /// replaced text is dropped. The replacement's own decorations are
    /// moved to its new position.
    pub fn splice(&mut self, range: Range<usize>, replacement: DecoratedText) -> Result<(), TextError> {
        self.check_range(&range)?;

        let Range { start, end } = range;
        let inserted = replacement.text.len();
        let map = |pos: usize, is_start: bool| -> usize {
            if pos <= start {
                pos
            } else if pos >= end {
                pos - end + start + inserted
            } else if is_start {
                start + inserted
            } else {
                start
            }
        };

        let old = std::mem::take(&mut self.decorations);
        for (span, decoration) in old {
            let new_start = map(span.start, true);
            let new_end = map(span.end, false);
            let collapsed = new_start > new_end || (new_start == new_end && span.start != span.end);
            if !collapsed {
                self.decorations.push((new_start..new_end, decoration));
            }
        }

        self.text.replace_range(start..end, &replacement.text);
        self.decorations.extend(
            replacement
                .decorations
                .into_iter()
                .map(|(span, decoration)| (span.start + start..span.end + start, decoration)),
        );
        Ok(())
    }

    /// Split into the plain string and its decorations.
    pub fn into_parts(self) -> (String, Vec<(Range<usize>, Decoration)>) {
        (self.text, self.decorations)
    }
}

impl fmt::Display for DecoratedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for DecoratedText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for DecoratedText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&String> for DecoratedText {
    fn from(text: &String) -> Self {
        Self::new(text.as_str())
    }
}

impl From<&DecoratedText> for DecoratedText {
    fn from(text: &DecoratedText) -> Self {
        text.clone()
    }
}
