#![forbid(unsafe_code)]

//! Applies a decoration to a text through a rule set
//!
//! Every pass of a rule set re-scans the text produced by the previous
//! pass, so a later rule sees substitutions made by an earlier one.

use super::replace::{Replacement, replace_matches};
use crate::decoration::Decoration;
use crate::rules::{MatchRule, RuleSet};
use crate::text::DecoratedText;

/// Decorate `source` with decorations produced by `make`.
///
/// With an empty rule set the whole text receives one decoration built
/// from the full text. Otherwise every qualifying match receives
/// `make(matched_text)`, on the replacement when its rule has one.
/// Decorations already on `source` are kept.
pub fn apply_decoration<F>(source: impl Into<DecoratedText>, rules: &RuleSet, mut make: F) -> DecoratedText
where
    F: FnMut(&str) -> Decoration,
{
    let mut text = source.into();

    if rules.is_empty() {
        let decoration = make(text.as_str());
        text.decorate_all(decoration);
        return text;
    }

    rules
        .clone()
        .into_rules()
        .iter()
        .fold(text, |text, rule| apply_rule(text, rule, &mut make))
}

fn apply_rule<F>(text: DecoratedText, rule: &MatchRule, make: &mut F) -> DecoratedText
where
    F: FnMut(&str) -> Decoration,
{
    let mut seen = 0usize;
    let mut qualified = 0usize;

    let out = replace_matches(text, rule.pattern(), |m| {
        seen += 1;
        if !rule.qualifies(m.occurrence()) {
            return None;
        }
        qualified += 1;
        log::trace!(
            "'{}' occurrence {} at {:?}",
            rule.pattern().as_str(),
            m.occurrence(),
            m.range()
        );

        rule.notify(m);
        let decoration = make(m.as_str());
        Some(match rule.replacement() {
            Some(replacement) => {
                let mut substitute = replacement.clone();
                substitute.decorate_all(decoration);
                Replacement::Substitute(substitute)
            }
            None => Replacement::Decorate(decoration),
        })
    });

    log::debug!(
        "Rule '{}' matched {} time(s), {} qualified",
        rule.pattern().as_str(),
        seen,
        qualified
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoration::CharacterStyle;
    use crate::types::Color;
    use regex::Regex;

    fn red(_: &str) -> Decoration {
        CharacterStyle::Foreground { color: Color::RED }.into()
    }

    fn ranges(text: &DecoratedText) -> Vec<std::ops::Range<usize>> {
        text.decorations().map(|(r, _)| r.clone()).collect()
    }

    #[test]
    fn test_none_decorates_whole_text() {
        let out = apply_decoration("Hello world", &RuleSet::None, red);
        assert_eq!(ranges(&out), vec![0..11]);

        let out = apply_decoration("Hello", &RuleSet::LiteralList(Vec::new()), red);
        assert_eq!(ranges(&out), vec![0..5]);
    }

    #[test]
    fn test_literal_matches() {
        let out = apply_decoration("a.b a.b", &RuleSet::from("a.b"), red);
        assert_eq!(ranges(&out), vec![0..3, 4..7]);
    }

    #[test]
    fn test_pattern_list_rescans() {
        let rules = RuleSet::from(vec![Regex::new("ab").unwrap(), Regex::new("b").unwrap()]);
        let out = apply_decoration("abb", &rules, red);
        assert_eq!(ranges(&out), vec![0..2, 1..2, 2..3]);
    }

    #[test]
    fn test_make_receives_matched_text() {
        let mut seen = Vec::new();
        apply_decoration("cat dog", &RuleSet::from(Regex::new(r"\w+").unwrap()), |m| {
            seen.push(m.to_string());
            red(m)
        });
        assert_eq!(seen, vec!["cat", "dog"]);
    }

    #[test]
    fn test_rule_counter_and_replacement() {
        let rule = MatchRule::literal("world").within(1..=1).replace_with("X");
        let out = apply_decoration("world world world", &RuleSet::from(rule), red);
        assert_eq!(out.as_str(), "world X world");
        assert_eq!(ranges(&out), vec![6..7]);
    }

    #[test]
    fn test_no_match_is_noop() {
        let out = apply_decoration("abc", &RuleSet::from("zzz"), red);
        assert_eq!(out.as_str(), "abc");
        assert_eq!(out.decorations_len(), 0);
    }
}
