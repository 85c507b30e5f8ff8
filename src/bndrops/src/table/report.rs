//! Plain-text reports over drop tables
//!
//! The enemy roster numbers every enemy block the same way the parser does,
//! so its lines can be pasted straight into an ignored-enemy file.

use super::parser::DropTable;
use super::row::{self, HEADER_PREFIX};
use crate::cursor::LineCursor;
use crate::drops::UNBANDED;
use crate::error::{DropTableError, Result};
use std::fmt::Write;

/// Every enemy block in a table, in table order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyRoster {
    pub source: String,
    pub enemies: Vec<String>,
}

impl EnemyRoster {
    /// `"{index:>3}: {name}"`, one enemy per line
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (index, name) in self.enemies.iter().enumerate() {
            let _ = writeln!(out, "{:>3}: {}", index, name);
        }
        out
    }
}

/// List enemy names from a table without parsing their rewards
pub fn enemy_roster(cursor: &mut LineCursor) -> Result<EnemyRoster> {
    cursor.reset();
    if !cursor.seek(|line| line.starts_with(HEADER_PREFIX)) {
        return Err(DropTableError::parse(
            cursor.source(),
            "no 'Enemy' header row found",
        ));
    }

    let mut enemies = Vec::new();
    let mut after_separator = false;

    while let Some(line) = cursor.next() {
        if row::is_separator(line.trim()) {
            after_separator = true;
        } else if after_separator && !line.trim().is_empty() {
            enemies.push(row::enemy_name(line).to_string());
            after_separator = false;
        }
    }

    Ok(EnemyRoster {
        source: cursor.source().to_string(),
        enemies,
    })
}

impl DropTable {
    /// Item → enemy → entries dump, for checking a parse by eye
    pub fn render_by_items(&self) -> String {
        let mut out = String::new();

        for (item, locations) in self.items() {
            let _ = writeln!(out, "{}:", item);
            for (enemy, drop) in &locations.enemy_drops {
                let _ = writeln!(out, "  {}:", enemy);
                for entry in &drop.drop_entries {
                    let labels: Vec<&str> = entry
                        .hp_percents
                        .iter()
                        .map(|l| if l == UNBANDED { "any" } else { l.as_str() })
                        .collect();
                    let ranks: Vec<String> = entry.ranks.iter().map(u8::to_string).collect();
                    let _ = writeln!(out, "    {}: {}", labels.join(", "), ranks.join(", "));
                }
            }
        }

        out
    }
}
