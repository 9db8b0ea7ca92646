#![forbid(unsafe_code)]

//! Named rule sets loaded from a directory of TOML documents
//!
//! Each `<name>.toml` file in the directory becomes the rule set `name`.

use crate::error::RuleError;
use crate::rules::RuleSet;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Rule sets keyed by name
#[derive(Debug, Default)]
pub struct RuleRegistry {
    sets: HashMap<String, RuleSet>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `.toml` file in `dir` as a named rule set
    ///
    /// A missing directory is logged and skipped. Subdirectories are not
    /// searched.
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if:
    /// - `dir` exists but is not a directory
    /// - A file cannot be read or parsed
    /// - Two files resolve to a name already in the registry
    pub fn load_dir(&mut self, dir: &Path) -> Result<(), RuleError> {
        if !dir.exists() {
            log::warn!("Rule directory does not exist: {}", dir.display());
            return Ok(());
        }

        if !dir.is_dir() {
            return Err(RuleError::InvalidDefinition(format!(
                "Path is not a directory: {}",
                dir.display()
            )));
        }

        let entries = fs::read_dir(dir).map_err(|e| {
            RuleError::InvalidDefinition(format!(
                "Failed to read directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                RuleError::InvalidDefinition(format!(
                    "Failed to read directory entry in {}: {}",
                    dir.display(),
                    e
                ))
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let set = RuleSet::from_path(&path)?;
            log::debug!("Loaded rule set '{}' with {} pass(es)", name, set.len());
            self.insert(name, set).map_err(|_| {
                RuleError::InvalidDefinition(format!(
                    "Duplicate rule set '{}' in file {}",
                    name,
                    path.display()
                ))
            })?;
        }

        Ok(())
    }

    /// Register `set` under `name`
    ///
    /// # Errors
    ///
    /// Returns the set back if `name` is already taken.
    pub fn insert(&mut self, name: impl Into<String>, set: RuleSet) -> Result<(), RuleSet> {
        let name = name.into();
        if self.sets.contains_key(&name) {
            return Err(set);
        }
        self.sets.insert(name, set);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&RuleSet> {
        self.sets.get(name)
    }

    /// A clone of the named set, or `RuleSet::None` if it is unknown
    pub fn resolve(&self, name: &str) -> RuleSet {
        match self.get(name) {
            Some(set) => set.clone(),
            None => {
                log::warn!("Unknown rule set '{}', decorating whole text", name);
                RuleSet::None
            }
        }
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
