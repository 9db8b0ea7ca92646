#![forbid(unsafe_code)]

use super::MatchRule;
use regex::Regex;

/// The rules a decoration is applied with
///
/// `None`, and every empty list, decorate the whole text once.
#[derive(Debug, Clone, Default)]
pub enum RuleSet {
    #[default]
    None,
    Literal(String),
    Pattern(Regex),
    Rule(MatchRule),
    LiteralList(Vec<String>),
    PatternList(Vec<Regex>),
    RuleList(Vec<MatchRule>),
}

impl RuleSet {
    /// True when applying this set decorates the whole text
    pub fn is_empty(&self) -> bool {
        match self {
            RuleSet::None => true,
            RuleSet::LiteralList(list) => list.is_empty(),
            RuleSet::PatternList(list) => list.is_empty(),
            RuleSet::RuleList(list) => list.is_empty(),
            RuleSet::Literal(_) | RuleSet::Pattern(_) | RuleSet::Rule(_) => false,
        }
    }

    /// Number of passes the engine makes over the text
    pub fn len(&self) -> usize {
        match self {
            RuleSet::None => 0,
            RuleSet::Literal(_) | RuleSet::Pattern(_) | RuleSet::Rule(_) => 1,
            RuleSet::LiteralList(list) => list.len(),
            RuleSet::PatternList(list) => list.len(),
            RuleSet::RuleList(list) => list.len(),
        }
    }

    /// Flatten into one `MatchRule` per pass, in application order.
    pub fn into_rules(self) -> Vec<MatchRule> {
        match self {
            RuleSet::None => Vec::new(),
            RuleSet::Literal(s) => vec![MatchRule::literal(s)],
            RuleSet::Pattern(re) => vec![MatchRule::new(super::Pattern::Regex(re))],
            RuleSet::Rule(rule) => vec![rule],
            RuleSet::LiteralList(list) => list.into_iter().map(MatchRule::literal).collect(),
            RuleSet::PatternList(list) => list
                .into_iter()
                .map(|re| MatchRule::new(super::Pattern::Regex(re)))
                .collect(),
            RuleSet::RuleList(list) => list,
        }
    }
}

impl From<()> for RuleSet {
    fn from(_: ()) -> Self {
        RuleSet::None
    }
}

impl From<&str> for RuleSet {
    fn from(s: &str) -> Self {
        RuleSet::Literal(s.to_string())
    }
}

impl From<String> for RuleSet {
    fn from(s: String) -> Self {
        RuleSet::Literal(s)
    }
}

impl From<Regex> for RuleSet {
    fn from(re: Regex) -> Self {
        RuleSet::Pattern(re)
    }
}

impl From<MatchRule> for RuleSet {
    fn from(rule: MatchRule) -> Self {
        RuleSet::Rule(rule)
    }
}

impl From<Vec<String>> for RuleSet {
    fn from(list: Vec<String>) -> Self {
        RuleSet::LiteralList(list)
    }
}

impl From<Vec<&str>> for RuleSet {
    fn from(list: Vec<&str>) -> Self {
        RuleSet::LiteralList(list.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RuleSet {
    fn from(list: [&str; N]) -> Self {
        RuleSet::LiteralList(list.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<Regex>> for RuleSet {
    fn from(list: Vec<Regex>) -> Self {
        RuleSet::PatternList(list)
    }
}

impl From<Vec<MatchRule>> for RuleSet {
    fn from(list: Vec<MatchRule>) -> Self {
        RuleSet::RuleList(list)
    }
}

impl<const N: usize> From<[MatchRule; N]> for RuleSet {
    fn from(list: [MatchRule; N]) -> Self {
        RuleSet::RuleList(list.into())
    }
}

impl<T: Into<RuleSet>> From<Option<T>> for RuleSet {
    fn from(rules: Option<T>) -> Self {
        rules.map_or(RuleSet::None, Into::into)
    }
}
