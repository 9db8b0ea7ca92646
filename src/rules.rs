#![forbid(unsafe_code)]

//! Match rules, rule sets and their TOML definitions

mod definition;
mod match_rule;
mod registry;
mod rule_set;

// Re-export core types
pub use match_rule::{MatchCallback, MatchRule, Pattern, RuleMatch};
pub use registry::RuleRegistry;
pub use rule_set::RuleSet;
