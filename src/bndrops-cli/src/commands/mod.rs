//! Command handlers for bndrops CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod annotate;
pub mod configure;
pub mod dump;
pub mod enemies;
pub mod find;

use crate::config::Config;
use anyhow::{Context, Result};
use bndrops::GameDropTable;
use std::path::Path;

/// Parse and fold every table of one game
pub fn load_game(config: &Config, data_dir: &Path, key: &str) -> Result<GameDropTable> {
    let games = config.resolved();
    let game = games.get(key)?;

    tracing::debug!(key, tables = game.tables.len(), data_dir = %data_dir.display(), "Loading game");

    GameDropTable::from_config(game, data_dir)
        .with_context(|| format!("Failed to load drop tables for '{}'", key))
}
