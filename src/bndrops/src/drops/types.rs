//! Drop data model: entries, per-enemy drops, per-item locations

use crate::error::{DropTableError, Result};
use crate::rank;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;

/// HP label used for every entry in tables without HP-percent bands
pub const UNBANDED: &str = "";

/// One (HP-percent labels, ranks) pairing for an enemy+item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropEntry {
    /// HP-percent condition labels, e.g. `">37.5%"`
    pub hp_percents: BTreeSet<String>,
    /// Ranks the item drops at, ascending
    pub ranks: BTreeSet<u8>,
}

impl DropEntry {
    /// Entry for one HP label with no ranks yet
    pub fn from_hp_percent(label: impl Into<String>) -> Self {
        Self {
            hp_percents: BTreeSet::from([label.into()]),
            ranks: BTreeSet::new(),
        }
    }

    /// Add a rank token (`"9"`, `"S"`) or an inclusive range (`"8 - S"`)
    pub fn add_rank(&mut self, token: &str) -> std::result::Result<(), InvalidRank> {
        let ranks = rank::parse_rank_token(token).ok_or_else(|| InvalidRank(token.to_string()))?;
        self.ranks.extend(ranks);
        Ok(())
    }

    /// Union of both entries' HP labels, if and only if their ranks match
    pub fn merge_if_ranks_equal(&self, other: &DropEntry) -> Option<DropEntry> {
        if self.ranks != other.ranks {
            return None;
        }

        Some(DropEntry {
            hp_percents: self.hp_percents.union(&other.hp_percents).cloned().collect(),
            ranks: self.ranks.clone(),
        })
    }

    pub fn format_ranks(&self) -> String {
        rank::format_ranks(&self.ranks)
    }
}

/// A rank token outside the rank alphabet
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid rank or rank range '{0}'")]
pub struct InvalidRank(pub String);

/// One enemy's drop entries for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnemyDrop {
    pub enemy_name: String,
    pub drop_entries: Vec<DropEntry>,
}

impl EnemyDrop {
    pub fn new(enemy_name: impl Into<String>) -> Self {
        Self {
            enemy_name: enemy_name.into(),
            drop_entries: Vec::new(),
        }
    }

    pub fn add_drop_entry(&mut self, entry: DropEntry) {
        self.drop_entries.push(entry);
    }

    /// Collapse entries that differ only in HP label.
    ///
    /// Three entries try the pairs (0,1), (0,2), (1,2) in that order; the
    /// first pair that merges is then offered the leftover entry.
    /// `source_name` identifies the table in the error for counts outside 1-3.
    pub fn fold_drop_entries(&mut self, source_name: &str) -> Result<()> {
        let folded = match self.drop_entries.as_slice() {
            [_] => None,
            [a, b] => a.merge_if_ranks_equal(b).map(|merged| vec![merged]),
            [a, b, c] => a
                .merge_if_ranks_equal(b)
                .map(|m| (m, c))
                .or_else(|| a.merge_if_ranks_equal(c).map(|m| (m, b)))
                .or_else(|| b.merge_if_ranks_equal(c).map(|m| (m, a)))
                .map(|(merged, leftover)| match merged.merge_if_ranks_equal(leftover) {
                    Some(all) => vec![all],
                    None => vec![merged, leftover.clone()],
                }),
            entries => {
                return Err(DropTableError::Fold {
                    enemy: self.enemy_name.clone(),
                    source_name: source_name.to_string(),
                    count: entries.len(),
                });
            }
        };

        if let Some(entries) = folded {
            self.drop_entries = entries;
        }

        Ok(())
    }
}

/// Every enemy that drops one item (`"{name} {code}"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDropLocations {
    pub name: String,
    /// Enemy name → drop, in first-seen order. Equality ignores the order.
    pub enemy_drops: IndexMap<String, EnemyDrop>,
}

impl ItemDropLocations {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enemy_drops: IndexMap::new(),
        }
    }

    /// Drop record for an enemy, created on first use
    pub fn enemy_drop_mut(&mut self, enemy_name: &str) -> &mut EnemyDrop {
        self.enemy_drops
            .entry(enemy_name.to_string())
            .or_insert_with(|| EnemyDrop::new(enemy_name))
    }

    pub fn get(&self, enemy_name: &str) -> Option<&EnemyDrop> {
        self.enemy_drops.get(enemy_name)
    }

    pub fn len(&self) -> usize {
        self.enemy_drops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemy_drops.is_empty()
    }
}
