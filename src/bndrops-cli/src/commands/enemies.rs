//! Enemy roster listing

use anyhow::{Context, Result};
use bndrops::{enemy_roster, LineCursor};
use std::fs;
use std::path::Path;

pub fn handle(drops: &Path) -> Result<()> {
    let text = fs::read_to_string(drops)
        .with_context(|| format!("Failed to read {}", drops.display()))?;

    let mut cursor = LineCursor::from_text(&text, drops.display().to_string());
    let roster = enemy_roster(&mut cursor)?;

    print!("{}", roster.render());
    Ok(())
}
