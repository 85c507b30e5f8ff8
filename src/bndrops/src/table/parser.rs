//! Drop table parsing
//!
//! A dump has a header row starting with `Enemy`, a dashed separator, then
//! one block per enemy, each ending in another separator:
//!
//! ```text
//! Enemy    HP%     Reward    Rank    Chance
//! --------------------------------------------------------
//! Mettaur  >37.5%  Guard1 A  7 - 7   5%
//!          >37.5%            8 - S   10%
//!
//!          <=37.5% Guard1 A  7 - 7   5%
//!          <=37.5%           8 - S   10%
//! --------------------------------------------------------
//! ```
//!
//! Blank lines split HP-percent groups. A three-field row starts a reward;
//! two-field rows after it add more ranks to that reward.

use super::ignored::IgnoredEnemies;
use super::row::{self, Row, HEADER_PREFIX, UNUSED_ENEMY};
use crate::cursor::LineCursor;
use crate::drops::{DropEntry, ItemDropLocations, UNBANDED};
use crate::error::{DropTableError, Result};
use indexmap::IndexMap;
use std::path::Path;

/// Parsed drop table for one game version
#[derive(Debug, Clone)]
pub struct DropTable {
    cursor: LineCursor,
    ignored: IgnoredEnemies,
    hp_banded: bool,
    version: Option<String>,
    enemy_count: usize,
    items: IndexMap<String, ItemDropLocations>,
}

impl DropTable {
    /// Unparsed table over `cursor`. `hp_banded` selects the variant whose
    /// rows carry an HP-percent label.
    pub fn new(cursor: LineCursor, hp_banded: bool) -> Self {
        Self {
            cursor,
            ignored: IgnoredEnemies::default(),
            hp_banded,
            version: None,
            enemy_count: 0,
            items: IndexMap::new(),
        }
    }

    pub fn from_text(text: &str, source: &str, hp_banded: bool) -> Self {
        Self::new(LineCursor::from_text(text, source), hp_banded)
    }

    pub fn with_ignored_enemies(mut self, ignored: IgnoredEnemies) -> Self {
        self.ignored = ignored;
        self
    }

    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    /// Read, parse and fold a table file (plus its optional ignored-enemy file)
    pub fn from_file(
        path: &Path,
        ignored_enemies: Option<&Path>,
        hp_banded: bool,
        version: Option<String>,
    ) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| DropTableError::io(path, e))?;
        let ignored = match ignored_enemies {
            Some(p) => IgnoredEnemies::from_file(p)?,
            None => IgnoredEnemies::default(),
        };

        let mut table = Self::from_text(&text, &path.display().to_string(), hp_banded)
            .with_ignored_enemies(ignored)
            .with_version(version);
        table.parse()?;
        table.fold_same_drop_entries()?;
        Ok(table)
    }

    /// Version label (e.g. `"6CG"`), if this table is one of a pair
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn source(&self) -> &str {
        self.cursor.source()
    }

    pub fn is_hp_banded(&self) -> bool {
        self.hp_banded
    }

    pub fn cursor(&self) -> &LineCursor {
        &self.cursor
    }

    /// Every item seen, keyed by `"{name} {code}"`, in first-seen order
    pub fn items(&self) -> &IndexMap<String, ItemDropLocations> {
        &self.items
    }

    pub fn get(&self, item: &str) -> Option<&ItemDropLocations> {
        self.items.get(item)
    }

    /// Enemy blocks seen by the last parse, skipped ones included
    pub fn enemy_count(&self) -> usize {
        self.enemy_count
    }

    /// Scan the whole table from the top, replacing earlier results
    pub fn parse(&mut self) -> Result<()> {
        self.cursor.reset();
        self.items.clear();
        self.enemy_count = 0;

        if !self.cursor.seek(|line| line.starts_with(HEADER_PREFIX)) {
            return Err(DropTableError::parse(
                self.cursor.source(),
                "no 'Enemy' header row found",
            ));
        }
        if !self.cursor.seek(|line| row::is_separator(line.trim())) {
            return Err(DropTableError::parse(
                self.cursor.source(),
                "no separator row after the 'Enemy' header",
            ));
        }

        while !self.cursor.is_end_of_file_or_last_line() {
            self.parse_enemy_block()?;
        }

        tracing::info!(
            source = self.cursor.source(),
            enemies = self.enemy_count,
            items = self.items.len(),
            "Parsed drop table"
        );
        Ok(())
    }

    /// Fold every enemy's entries for every item
    pub fn fold_same_drop_entries(&mut self) -> Result<()> {
        let source = self.cursor.source();
        for locations in self.items.values_mut() {
            for enemy_drop in locations.enemy_drops.values_mut() {
                enemy_drop.fold_drop_entries(source)?;
            }
        }
        Ok(())
    }

    /// Parse one block; the cursor starts on the separator before it and
    /// ends on the separator after it (or past the end of input).
    fn parse_enemy_block(&mut self) -> Result<()> {
        // Blank lines before an enemy (or trailing the last block) are not blocks
        if self.cursor.next().is_none() || !self.cursor.seek(|line| !line.trim().is_empty()) {
            return Ok(());
        }
        let Some(first_line) = self.cursor.current().map(str::to_owned) else {
            return Ok(());
        };

        let enemy = row::enemy_name(&first_line).to_string();
        let index = self.enemy_count;
        self.enemy_count += 1;

        let skip = match self.ignored.get(index) {
            Some(expected) if expected != enemy => {
                return Err(DropTableError::consistency(
                    self.cursor.location(),
                    format!(
                        "ignored enemy mismatch: expected ({}, {}), got ({}, {})",
                        index, expected, index, enemy
                    ),
                ));
            }
            Some(_) => true,
            None => enemy == UNUSED_ENEMY,
        };

        if skip {
            tracing::debug!(index, enemy = %enemy, "Skipping enemy");
            self.skip_block();
            return Ok(());
        }

        let Self {
            cursor,
            items,
            hp_banded,
            ..
        } = self;

        let mut scan = RewardScan {
            enemy: &enemy,
            hp_banded: *hp_banded,
            hp_group: None,
            state: RewardState::FoundNewReward,
            items,
        };

        let mut line = row::strip_enemy_name(&first_line).to_string();
        loop {
            let shape = row::classify_row(&line, scan.hp_banded);
            if let Flow::EndOfBlock = scan.feed(shape, cursor)? {
                return Ok(());
            }

            match cursor.next() {
                Some(next) => line = next.to_owned(),
                None => break,
            }
        }

        // Input ran out inside the block
        scan.flush();
        Ok(())
    }

    fn skip_block(&mut self) {
        while let Some(line) = self.cursor.next() {
            if row::is_separator(line.trim()) {
                break;
            }
        }
    }
}

/// Position of the reward scan within an enemy block
#[derive(Debug)]
enum RewardState {
    FoundNewReward,
    OnCurrentReward { reward: String, entry: DropEntry },
    SkipCurrentReward,
}

enum Flow {
    Continue,
    EndOfBlock,
}

/// Reward-row state machine for one enemy block
struct RewardScan<'t> {
    enemy: &'t str,
    hp_banded: bool,
    /// HP label shared by the rows of the current group
    hp_group: Option<String>,
    state: RewardState,
    items: &'t mut IndexMap<String, ItemDropLocations>,
}

impl RewardScan<'_> {
    fn feed(&mut self, row: Row<'_>, cursor: &LineCursor) -> Result<Flow> {
        let state = std::mem::replace(&mut self.state, RewardState::FoundNewReward);

        self.state = match (state, row) {
            (state, Row::Separator) => {
                self.close(state);
                return Ok(Flow::EndOfBlock);
            }
            (state, Row::Blank) => {
                self.close(state);
                self.hp_group = None;
                RewardState::FoundNewReward
            }
            (RewardState::OnCurrentReward { reward, mut entry }, Row::Continuation { hp, rank, .. }) => {
                self.resolve_hp(hp, cursor)?;
                add_rank(&mut entry, rank, cursor)?;
                RewardState::OnCurrentReward { reward, entry }
            }
            (
                RewardState::OnCurrentReward { reward, entry },
                Row::NewReward {
                    hp,
                    reward: next,
                    rank,
                    ..
                },
            ) => {
                let hp = self.resolve_hp(hp, cursor)?;
                self.commit(reward, entry);
                self.open(next, rank, hp, cursor)?
            }
            (
                RewardState::SkipCurrentReward | RewardState::FoundNewReward,
                Row::NewReward {
                    hp, reward, rank, ..
                },
            ) => {
                let hp = self.resolve_hp(hp, cursor)?;
                self.open(reward, rank, hp, cursor)?
            }
            (RewardState::SkipCurrentReward, row) => {
                self.resolve_hp(row.hp(), cursor)?;
                RewardState::SkipCurrentReward
            }
            (RewardState::OnCurrentReward { .. }, Row::Malformed { hp, fields, .. }) => {
                self.resolve_hp(hp, cursor)?;
                return Err(DropTableError::parse(
                    cursor.location(),
                    format!(
                        "expected 'rank, percent' or 'reward, rank, percent', got {:?}",
                        fields
                    ),
                ));
            }
            (RewardState::FoundNewReward, row) => {
                self.resolve_hp(row.hp(), cursor)?;
                return Err(DropTableError::parse(
                    cursor.location(),
                    format!("expected 'reward, rank, percent', got {:?}", row),
                ));
            }
        };

        Ok(Flow::Continue)
    }

    /// HP label for a row, checked against its group
    fn resolve_hp(&mut self, label: Option<&str>, cursor: &LineCursor) -> Result<String> {
        if !self.hp_banded {
            return Ok(UNBANDED.to_string());
        }

        match (label, &self.hp_group) {
            (Some(label), Some(group)) if label != group => Err(DropTableError::consistency(
                cursor.location(),
                format!(
                    "HP label '{}' differs from '{}' earlier in the group for enemy '{}'",
                    label, group, self.enemy
                ),
            )),
            (Some(label), _) => {
                self.hp_group = Some(label.to_string());
                Ok(label.to_string())
            }
            (None, Some(group)) => Ok(group.clone()),
            (None, None) => Err(DropTableError::parse(
                cursor.location(),
                format!("row for enemy '{}' has no HP-percent label", self.enemy),
            )),
        }
    }

    fn open(
        &mut self,
        reward: &str,
        rank: &str,
        hp: String,
        cursor: &LineCursor,
    ) -> Result<RewardState> {
        if row::is_skipped_reward(reward) {
            tracing::trace!(enemy = self.enemy, reward, "Skipping non-chip reward");
            return Ok(RewardState::SkipCurrentReward);
        }

        let mut entry = DropEntry::from_hp_percent(hp);
        add_rank(&mut entry, rank, cursor)?;

        self.items
            .entry(reward.to_string())
            .or_insert_with(|| ItemDropLocations::new(reward))
            .enemy_drop_mut(self.enemy);

        Ok(RewardState::OnCurrentReward {
            reward: reward.to_string(),
            entry,
        })
    }

    fn commit(&mut self, reward: String, entry: DropEntry) {
        self.items
            .entry(reward.clone())
            .or_insert_with(|| ItemDropLocations::new(reward))
            .enemy_drop_mut(self.enemy)
            .add_drop_entry(entry);
    }

    /// Close the open entry, if any
    fn flush(&mut self) {
        let state = std::mem::replace(&mut self.state, RewardState::FoundNewReward);
        self.close(state);
    }

    fn close(&mut self, state: RewardState) {
        if let RewardState::OnCurrentReward { reward, entry } = state {
            self.commit(reward, entry);
        }
    }
}

fn add_rank(entry: &mut DropEntry, rank: &str, cursor: &LineCursor) -> Result<()> {
    entry
        .add_rank(rank)
        .map_err(|e| DropTableError::parse(cursor.location(), e.to_string()))
}
