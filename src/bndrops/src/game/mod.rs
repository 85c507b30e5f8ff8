//! Chip location strings for a whole game
//!
//! A game has one drop table, or two when it shipped as a pair of versions
//! (Red Sun / Blue Moon, Gregar / Falzar). For a pair, a chip whose
//! locations agree renders once; one found in a single version is tagged
//! with that version; anything else goes through the per-game rules in
//! [`reconcile`] or the fixed texts in [`overrides`].

mod bands;
pub mod overrides;
mod reconcile;

pub use bands::{HpBand, HpBandNames, HpBandPreset, NamedHpBands};

use crate::config::GameConfig;
use crate::drops::ItemDropLocations;
use crate::error::{DropTableError, Result};
use crate::table::DropTable;
use reconcile::Side;
use std::path::Path;

/// A drop table tagged with the version it belongs to
#[derive(Debug, Clone)]
pub struct VersionedTable {
    pub table: DropTable,
    pub version: String,
}

impl VersionedTable {
    pub fn new(table: DropTable, version: impl Into<String>) -> Self {
        Self {
            table,
            version: version.into(),
        }
    }

    fn side<'a>(&'a self, locations: &'a ItemDropLocations) -> Side<'a> {
        Side {
            locations,
            version: &self.version,
            source: self.table.source(),
        }
    }
}

#[derive(Debug, Clone)]
enum Tables {
    Single(DropTable),
    Pair(Box<[VersionedTable; 2]>),
}

/// One game's drop tables plus what it takes to render their locations
#[derive(Debug, Clone)]
pub struct GameDropTable {
    tables: Tables,
    hp_band_names: Option<HpBandNames>,
    game: Option<u8>,
}

impl GameDropTable {
    pub fn single(table: DropTable) -> Self {
        Self {
            tables: Tables::Single(table),
            hp_band_names: None,
            game: None,
        }
    }

    pub fn pair(first: VersionedTable, second: VersionedTable) -> Self {
        Self {
            tables: Tables::Pair(Box::new([first, second])),
            hp_band_names: None,
            game: None,
        }
    }

    /// Build from parsed tables. Two tables must both carry a version label.
    pub fn from_tables(mut tables: Vec<DropTable>) -> Result<Self> {
        match tables.len() {
            1 => Ok(Self::single(tables.remove(0))),
            2 => {
                let second = tables.remove(1);
                let first = tables.remove(0);
                Ok(Self::pair(versioned(first)?, versioned(second)?))
            }
            n => Err(DropTableError::Config(format!(
                "a game has one or two drop tables, got {}",
                n
            ))),
        }
    }

    /// Load every table a game definition names, resolving paths against
    /// `base_dir`
    pub fn from_config(config: &GameConfig, base_dir: &Path) -> Result<Self> {
        let hp_banded = config.hp_bands.is_some();

        let tables = config
            .tables
            .iter()
            .map(|t| {
                let ignored = t.ignored_enemies.as_ref().map(|p| base_dir.join(p));
                DropTable::from_file(
                    &base_dir.join(&t.drops),
                    ignored.as_deref(),
                    hp_banded,
                    t.version.clone(),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        let mut game = Self::from_tables(tables)?.with_game(config.number);
        if let Some(preset) = &config.hp_bands {
            game = game.with_hp_band_names(preset.names());
        }
        Ok(game)
    }

    pub fn with_hp_band_names(mut self, names: HpBandNames) -> Self {
        self.hp_band_names = Some(names);
        self
    }

    pub fn with_game(mut self, game: Option<u8>) -> Self {
        self.game = game;
        self
    }

    pub fn game(&self) -> Option<u8> {
        self.game
    }

    pub fn tables(&self) -> Vec<&DropTable> {
        match &self.tables {
            Tables::Single(table) => vec![table],
            Tables::Pair(pair) => pair.iter().map(|v| &v.table).collect(),
        }
    }

    /// Wiki location text for one chip code, or `None` if nothing drops it
    pub fn find_chip(&self, name: &str, code: &str) -> Result<Option<String>> {
        let item = format!("{} {}", name, code);

        let pair = match &self.tables {
            Tables::Single(table) => {
                return match table.get(&item) {
                    Some(locations) => self.render(&item, locations, table.source(), None).map(Some),
                    None => Ok(None),
                };
            }
            Tables::Pair(pair) => pair,
        };

        let [first, second] = &**pair;
        let text = match (first.table.get(&item), second.table.get(&item)) {
            (None, None) => return Ok(None),
            (Some(locations), None) => {
                self.render(&item, locations, first.table.source(), Some(first.version.as_str()))?
            }
            (None, Some(locations)) => {
                self.render(&item, locations, second.table.source(), Some(second.version.as_str()))?
            }
            (Some(a), Some(b)) if a == b => self.render(&item, a, first.table.source(), None)?,
            (Some(a), Some(b)) => self.reconcile(name, code, &item, first.side(a), second.side(b))?,
        };

        Ok(Some(text))
    }

    fn reconcile(
        &self,
        name: &str,
        code: &str,
        item: &str,
        first: Side<'_>,
        second: Side<'_>,
    ) -> Result<String> {
        let unhandled = || DropTableError::UnhandledCase {
            game: self
                .game
                .map_or_else(|| "(unnumbered)".to_string(), |n| n.to_string()),
            item: item.to_string(),
        };

        let Some(game) = self.game else {
            return Err(unhandled());
        };

        if let Some(text) = overrides::find_override(game, name, code) {
            tracing::debug!(game, item, "Using fixed location text");
            return Ok(text.to_string());
        }

        match game {
            3 | 4 => reconcile::side_by_side(item, first, second),
            6 => reconcile::larger_enemy_set(item, first, second).unwrap_or_else(|| Err(unhandled())),
            _ => Err(unhandled()),
        }
    }

    /// `"{tag}Enemy (High: LV..; Low: LV..), ..."` for a location list that
    /// needs no reconciling
    fn render(
        &self,
        item: &str,
        locations: &ItemDropLocations,
        source: &str,
        version: Option<&str>,
    ) -> Result<String> {
        let prefix = version
            .map(|v| format!("{} ", reconcile::version_tag(v)))
            .unwrap_or_default();

        let mut parts = Vec::with_capacity(locations.len());

        for (enemy, drop) in &locations.enemy_drops {
            let bands = match &self.hp_band_names {
                Some(names) => drop
                    .drop_entries
                    .iter()
                    .map(|entry| {
                        let band = names.name_for(&entry.hp_percents).ok_or_else(|| {
                            DropTableError::consistency(
                                source,
                                format!(
                                    "no HP band name for labels {:?} ('{}' dropping '{}')",
                                    entry.hp_percents, enemy, item
                                ),
                            )
                        })?;
                        let ranks = entry.format_ranks();
                        Ok(if band.is_empty() {
                            ranks
                        } else {
                            format!("{}: {}", band, ranks)
                        })
                    })
                    .collect::<Result<Vec<_>>>()?
                    .join("; "),
                None => match drop.drop_entries.as_slice() {
                    [entry] => entry.format_ranks(),
                    entries => {
                        return Err(DropTableError::Fold {
                            enemy: enemy.clone(),
                            source_name: source.to_string(),
                            count: entries.len(),
                        });
                    }
                },
            };

            parts.push(format!("{}{} ({})", prefix, enemy, bands));
        }

        Ok(parts.join(", "))
    }
}

fn versioned(table: DropTable) -> Result<VersionedTable> {
    let version = table.version().map(str::to_owned).ok_or_else(|| {
        DropTableError::Config(format!(
            "{} is one of two tables but has no version label",
            table.source()
        ))
    })?;
    Ok(VersionedTable::new(table, version))
}
