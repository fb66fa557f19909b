//! Case-insensitive level alias resolution.
//!
//! Built once per run from `level_aliases` and shared by reference with both
//! normalizers.

use crate::{config::LevelAliasEntry, error::ConfigError};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct LevelAliasResolver {
    /// Lower-cased alias → canonical level.
    index: HashMap<String, String>,
}

impl LevelAliasResolver {
    /// First registration wins: an alias listed under two levels keeps the
    /// level that appears first in `entries`.
    pub fn from_config(entries: &[LevelAliasEntry]) -> Result<Self, ConfigError> {
        let mut index = HashMap::new();

        for (i, entry) in entries.iter().enumerate() {
            if entry.level.trim().is_empty() {
                return Err(ConfigError::EmptyLevel { index: i });
            }
            for alias in &entry.aliases {
                let key = alias.to_lowercase();
                if let Some(existing) = index.get(&key) {
                    if *existing != entry.level {
                        tracing::debug!(
                            alias = %alias,
                            kept = %existing,
                            ignored = %entry.level,
                            "level alias registered twice; keeping first"
                        );
                    }
                    continue;
                }
                index.insert(key, entry.level.clone());
            }
        }

        Ok(Self { index })
    }

    /// Canonical level for `token`, ignoring case.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.index.get(&token.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
