#![forbid(unsafe_code)]

//! TOML rule-set documents
//!
//! A document holds exactly one of:
//!
//! ```toml
//! [[rule]]
//! pattern = "world"
//! regex = false
//! match-range = [0, 2]
//! replacement = "X"
//! ```
//!
//! `literals = ["a", "b"]`, `patterns = ["a+", "b+"]`, or a
//! `rules = [..]` array whose first element decides the shape of the
//! whole list: strings are literals, `{ regex = ".." }` tables are
//! patterns and tables with a `pattern` key are full rules.

use super::{MatchRule, Pattern, RuleSet};
use crate::error::RuleError;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RuleDefinition {
    pattern: String,
    #[serde(default)]
    regex: bool,
    #[serde(default)]
    match_index: Option<usize>,
    #[serde(default)]
    match_range: Option<[usize; 2]>,
    #[serde(default)]
    replacement: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleSetDocument {
    #[serde(default)]
    rule: Option<Vec<RuleDefinition>>,
    #[serde(default)]
    literals: Option<Vec<String>>,
    #[serde(default)]
    patterns: Option<Vec<String>>,
    #[serde(default)]
    rules: Option<Vec<toml::Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Literal,
    Pattern,
    Rule,
}

impl Shape {
    fn of(value: &toml::Value) -> Option<Shape> {
        match value {
            toml::Value::String(_) => Some(Shape::Literal),
            toml::Value::Table(table) if table.contains_key("pattern") => Some(Shape::Rule),
            toml::Value::Table(table)
                if table.len() == 1 && matches!(table.get("regex"), Some(toml::Value::String(_))) =>
            {
                Some(Shape::Pattern)
            }
            _ => None,
        }
    }
}

impl RuleDefinition {
    fn into_rule(self) -> Result<MatchRule, RuleError> {
        let mut rule = MatchRule::new(Pattern::new(&self.pattern, self.regex)?);

        if let Some(index) = self.match_index {
            rule = rule.at(index);
        }
        if let Some([start, end]) = self.match_range {
            if start > end {
                return Err(RuleError::InvalidDefinition(format!(
                    "match-range [{}, {}] for '{}' is reversed",
                    start, end, self.pattern
                )));
            }
            rule = rule.within(start..=end);
        }
        if let Some(replacement) = self.replacement {
            rule = rule.replace_with(replacement);
        }
        Ok(rule)
    }
}

fn compile(pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|e| {
        RuleError::InvalidRegex(format!("Failed to compile pattern '{}': {}", pattern, e))
    })
}

fn shape_error(index: usize, value: &toml::Value) -> RuleError {
    RuleError::UnsupportedRuleShape(format!(
        "rules[{}] is a {} that is not a literal, a regex table or a rule table",
        index,
        value.type_str()
    ))
}

fn rules_from_values(values: Vec<toml::Value>) -> Result<RuleSet, RuleError> {
    let Some(first) = values.first() else {
        return Ok(RuleSet::None);
    };
    let shape = Shape::of(first).ok_or_else(|| shape_error(0, first))?;

    if let Some((index, value)) = values
        .iter()
        .enumerate()
        .find(|(_, value)| Shape::of(value) != Some(shape))
    {
        return Err(match Shape::of(value) {
            Some(other) => RuleError::UnsupportedRuleShape(format!(
                "rules[{}] is a {:?} but the list holds {:?} entries",
                index, other, shape
            )),
            None => shape_error(index, value),
        });
    }

    match shape {
        Shape::Literal => Ok(RuleSet::LiteralList(
            values
                .into_iter()
                .filter_map(|value| value.as_str().map(str::to_string))
                .collect(),
        )),
        Shape::Pattern => values
            .iter()
            .filter_map(|value| value.get("regex").and_then(toml::Value::as_str))
            .map(compile)
            .collect::<Result<Vec<_>, _>>()
            .map(RuleSet::PatternList),
        Shape::Rule => values
            .into_iter()
            .map(|value| {
                let def: RuleDefinition = value.try_into().map_err(|e| {
                    RuleError::InvalidDefinition(format!("Invalid rule table: {}", e))
                })?;
                def.into_rule()
            })
            .collect::<Result<Vec<_>, _>>()
            .map(RuleSet::RuleList),
    }
}

impl RuleSet {
    /// Parse a rule set from a TOML document
    ///
    /// An empty document yields `RuleSet::None`.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidDefinition` if the TOML is malformed, a
    /// field is unknown, more than one rule key is present, or a range is
    /// reversed. Returns `RuleError::InvalidRegex` for patterns that do
    /// not compile and `RuleError::UnsupportedRuleShape` for `rules`
    /// arrays whose entries are not all of one supported shape.
    pub fn from_toml(content: &str) -> Result<Self, RuleError> {
        let doc: RuleSetDocument = toml::from_str(content)
            .map_err(|e| RuleError::InvalidDefinition(format!("Failed to parse TOML: {}", e)))?;

        let present = [
            doc.rule.is_some(),
            doc.literals.is_some(),
            doc.patterns.is_some(),
            doc.rules.is_some(),
        ]
        .into_iter()
        .filter(|p| *p)
        .count();
        if present > 1 {
            return Err(RuleError::InvalidDefinition(
                "A rule set document may only use one of rule, literals, patterns or rules"
                    .to_string(),
            ));
        }

        if let Some(defs) = doc.rule {
            return defs
                .into_iter()
                .map(RuleDefinition::into_rule)
                .collect::<Result<Vec<_>, _>>()
                .map(RuleSet::RuleList);
        }
        if let Some(literals) = doc.literals {
            return Ok(RuleSet::LiteralList(literals));
        }
        if let Some(patterns) = doc.patterns {
            return patterns
                .iter()
                .map(String::as_str)
                .map(compile)
                .collect::<Result<Vec<_>, _>>()
                .map(RuleSet::PatternList);
        }
        if let Some(values) = doc.rules {
            return rules_from_values(values);
        }
        Ok(RuleSet::None)
    }

    /// Parse a rule set from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, RuleError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuleError::InvalidDefinition(format!("Failed to read file {:?}: {}", path, e))
        })?;
        Self::from_toml(&content)
    }
}
