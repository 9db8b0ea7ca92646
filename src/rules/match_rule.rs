#![forbid(unsafe_code)]

//! Core MatchRule type and the matches it produces

use crate::error::RuleError;
use crate::text::DecoratedText;
use regex::Regex;
use std::fmt;
use std::ops::{Range, RangeInclusive};
use std::sync::Arc;

/// What a rule searches for
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Matched exactly, as if escaped and compiled
    Literal(String),
    Regex(Regex),
}

impl Pattern {
    /// Compile `pattern` as a regex, or take it literally when `is_regex`
    /// is false.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRegex` if the regex does not compile.
    pub fn new(pattern: &str, is_regex: bool) -> Result<Self, RuleError> {
        if !is_regex {
            return Ok(Pattern::Literal(pattern.to_string()));
        }
        Regex::new(pattern).map(Pattern::Regex).map_err(|e| {
            RuleError::InvalidRegex(format!("Failed to compile pattern '{}': {}", pattern, e))
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Literal(s) => s,
            Pattern::Regex(re) => re.as_str(),
        }
    }

    /// All non-overlapping matches in `haystack`, leftmost first.
    pub fn find_all<'h>(&self, haystack: &'h str) -> Vec<RuleMatch<'h>> {
        match self {
            Pattern::Literal(needle) => find_literal(needle, haystack),
            Pattern::Regex(re) => find_regex(re, haystack),
        }
    }
}

pub(crate) fn find_literal<'h>(needle: &str, haystack: &'h str) -> Vec<RuleMatch<'h>> {
    haystack
        .match_indices(needle)
        .enumerate()
        .map(|(occurrence, (start, m))| {
            let range = start..start + m.len();
            RuleMatch {
                haystack,
                range: range.clone(),
                occurrence,
                groups: vec![Some(range)],
            }
        })
        .collect()
}

pub(crate) fn find_regex<'h>(re: &Regex, haystack: &'h str) -> Vec<RuleMatch<'h>> {
    re.captures_iter(haystack)
        .enumerate()
        .filter_map(|(occurrence, caps)| {
            let whole = caps.get(0)?;
            Some(RuleMatch {
                haystack,
                range: whole.range(),
                occurrence,
                groups: caps.iter().map(|g| g.map(|g| g.range())).collect(),
            })
        })
        .collect()
}

/// One occurrence of a pattern in the text being scanned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch<'h> {
    haystack: &'h str,
    range: Range<usize>,
    occurrence: usize,
    groups: Vec<Option<Range<usize>>>,
}

impl<'h> RuleMatch<'h> {
    /// The matched text
    pub fn as_str(&self) -> &'h str {
        &self.haystack[self.range.clone()]
    }

    /// Byte range of the match in the scanned text
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Zero-based index of this match among all matches of the scan
    pub fn occurrence(&self) -> usize {
        self.occurrence
    }

    /// Capture group `index`; group 0 is the whole match
    pub fn group(&self, index: usize) -> Option<&'h str> {
        let range = self.groups.get(index)?.clone()?;
        Some(&self.haystack[range])
    }

    /// Number of groups, including group 0
    pub fn group_len(&self) -> usize {
        self.groups.len()
    }
}

/// Callback run with the raw match for every qualifying occurrence
pub type MatchCallback = Arc<dyn Fn(&RuleMatch<'_>) + Send + Sync>;

/// Selects which occurrences of a pattern receive a decoration or a
/// replacement
#[derive(Clone)]
pub struct MatchRule {
    pattern: Pattern,
    match_index: Option<usize>,
    match_range: Option<RangeInclusive<usize>>,
    replacement: Option<DecoratedText>,
    on_match: Option<MatchCallback>,
}

impl fmt::Debug for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchRule")
            .field("pattern", &self.pattern)
            .field("match_range", &self.effective_range())
            .field("replacement", &self.replacement.as_ref().map(DecoratedText::as_str))
            .field("on_match", &self.on_match.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl MatchRule {
    /// A rule matching every occurrence of `pattern`
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            match_index: None,
            match_range: None,
            replacement: None,
            on_match: None,
        }
    }

    /// A rule matching `text` exactly
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(Pattern::Literal(text.into()))
    }

    /// A rule matching the regular expression `pattern`
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRegex` if the pattern does not compile.
    pub fn regex(pattern: &str) -> Result<Self, RuleError> {
        Pattern::new(pattern, true).map(Self::new)
    }

    /// Restrict the rule to the single occurrence `index`
    ///
    /// Ignored when a range is also set with [`MatchRule::within`].
    pub fn at(mut self, index: usize) -> Self {
        self.match_index = Some(index);
        self
    }

    /// Restrict the rule to occurrences whose index lies in `range`
    pub fn within(mut self, range: RangeInclusive<usize>) -> Self {
        self.match_range = Some(range);
        self
    }

    /// Substitute qualifying matches with `text`
    pub fn replace_with(mut self, text: impl Into<DecoratedText>) -> Self {
        self.replacement = Some(text.into());
        self
    }

    /// Observe every qualifying match
    pub fn on_match(mut self, f: impl Fn(&RuleMatch<'_>) + Send + Sync + 'static) -> Self {
        self.on_match = Some(Arc::new(f));
        self
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn replacement(&self) -> Option<&DecoratedText> {
        self.replacement.as_ref()
    }

    /// Occurrence indices this rule applies to; `None` means all
    pub fn effective_range(&self) -> Option<RangeInclusive<usize>> {
        self.match_range
            .clone()
            .or_else(|| self.match_index.map(|index| index..=index))
    }

    /// Whether the occurrence with index `occurrence` qualifies
    pub fn qualifies(&self, occurrence: usize) -> bool {
        self.effective_range()
            .is_none_or(|range| range.contains(&occurrence))
    }

    pub(crate) fn notify(&self, m: &RuleMatch<'_>) {
        if let Some(callback) = &self.on_match {
            callback(m);
        }
    }
}
