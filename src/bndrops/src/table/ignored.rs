//! Ignored-enemy side files
//!
//! One `"{index}: {name}"` pair per line. The index is the enemy's position
//! in its table, so the name is only there to catch a stale file.

use crate::error::{DropTableError, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Table index → expected enemy name for enemies the parser skips
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoredEnemies {
    by_index: BTreeMap<usize, String>,
}

impl IgnoredEnemies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse side-file text; `source` names the file in errors
    pub fn parse(text: &str, source: &str) -> Result<Self> {
        let mut by_index = BTreeMap::new();

        for (line_idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let location = format!("{}:{}", source, line_idx + 1);
            let (index, name) = line.split_once(": ").ok_or_else(|| {
                DropTableError::parse(&location, format!("expected 'index: name', got '{}'", line))
            })?;
            let index = index.trim().parse::<usize>().map_err(|e| {
                DropTableError::parse(&location, format!("invalid enemy index '{}': {}", index, e))
            })?;

            by_index.insert(index, name.trim().to_string());
        }

        Ok(Self { by_index })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| DropTableError::io(path, e))?;
        Self::parse(&text, &path.display().to_string())
    }

    pub fn insert(&mut self, index: usize, name: impl Into<String>) {
        self.by_index.insert(index, name.into());
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.by_index.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }
}
