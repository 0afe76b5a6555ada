use std::collections::HashMap;
use crate::models::{Result, ScoreError};

/// Lowercased alias -> entry position, shared by both category registries.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    positions: HashMap<String, usize>,
}

impl AliasIndex {
    /// Builds the index from `(name, aliases)` pairs in registry order. Two
    /// entries claiming the same alias is a configuration error.
    pub fn build<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let mut positions = HashMap::new();
        let mut names: Vec<&str> = Vec::new();

        for (position, (name, aliases)) in entries.into_iter().enumerate() {
            names.push(name);
            for alias in aliases {
                if let Some(existing) = positions.insert(alias.to_lowercase(), position) {
                    return Err(ScoreError::ConfigError(format!(
                        "alias '{}' is claimed by both {} and {}",
                        alias, names[existing], name
                    )));
                }
            }
        }

        Ok(Self { positions })
    }

    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.positions.get(&name.to_lowercase()).copied()
    }
}
