//! Path-set resolution.
//!
//! The registry is built once from [`Config`] and is read-only afterwards.
//! [`PathSetRegistry::resolve`] only looks at that in-memory table; nothing
//! here touches the filesystem.

use std::path::PathBuf;

use crate::{
    config::{Config, PathSetConfig},
    error::{Error, Result},
};

/// One directory to operate on, tagged with the set it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub set: String,
    /// The path as written in the configuration, used for display.
    pub entry: String,
    /// `entry` joined to the registry root.
    pub dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct PathSetRegistry {
    root: PathBuf,
    sets: Vec<PathSetConfig>,
}

impl PathSetRegistry {
    pub fn new(root: impl Into<PathBuf>, sets: Vec<PathSetConfig>) -> Self {
        Self {
            root: root.into(),
            sets,
        }
    }

    pub fn from_config(cfg: &Config, root: impl Into<PathBuf>) -> Self {
        Self::new(root, cfg.sets.clone())
    }

    /// Set names in declared order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|s| s.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sets.iter().any(|s| s.name == name)
    }

    /// Directories for `set`, or for every set in declared order when `None`.
    pub fn resolve(&self, set: Option<&str>) -> Result<Vec<Target>> {
        let selected: Vec<&PathSetConfig> = match set {
            None => self.sets.iter().collect(),
            Some(name) => vec![
                self.sets
                    .iter()
                    .find(|s| s.name == name)
                    .ok_or_else(|| Error::UnknownSet { name: name.into() })?,
            ],
        };

        Ok(selected
            .into_iter()
            .flat_map(|s| {
                s.paths.iter().map(|entry| Target {
                    set: s.name.clone(),
                    entry: entry.clone(),
                    dir: self.root.join(entry.trim_start_matches('/')),
                })
            })
            .collect())
    }
}
