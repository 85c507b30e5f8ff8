//! Batch chip lookup over a chip list

use super::load_game;
use crate::config::Config;
use anyhow::{Context, Result};
use bndrops::GameDropTable;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Counts from one annotate run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub found: usize,
    pub missing: usize,
    pub skipped: usize,
}

pub fn handle(config: &Config, data_dir: &Path, game: &str, chips: &Path, strict: bool) -> Result<()> {
    let table = load_game(config, data_dir, game)?;
    let text = fs::read_to_string(chips)
        .with_context(|| format!("Failed to read chip list {}", chips.display()))?;

    let stdout = io::stdout();
    let summary = annotate(&table, &text, strict, &mut stdout.lock())?;

    tracing::info!(
        found = summary.found,
        missing = summary.missing,
        skipped = summary.skipped,
        "Annotated chip list"
    );
    Ok(())
}

/// `"name<TAB>code"`, or `"name code"` split at the last space
pub fn parse_chip_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (name, code) = line.split_once('\t').or_else(|| line.rsplit_once(' '))?;
    let (name, code) = (name.trim(), code.trim());
    (!name.is_empty() && !code.is_empty()).then_some((name, code))
}

/// Write `"name code: location"` for every listed chip that drops somewhere
pub fn annotate(
    table: &GameDropTable,
    chip_list: &str,
    strict: bool,
    out: &mut impl Write,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for line in chip_list.lines() {
        let Some((name, code)) = parse_chip_line(line) else {
            continue;
        };

        match table.find_chip(name, code) {
            Ok(Some(text)) => {
                writeln!(out, "{} {}: {}", name, code, text)?;
                summary.found += 1;
            }
            Ok(None) => summary.missing += 1,
            Err(e) if !strict && e.is_recoverable() => {
                tracing::warn!(chip = %format!("{} {}", name, code), error = %e, "Skipping chip");
                summary.skipped += 1;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed on '{} {}'", name, code));
            }
        }
    }

    Ok(summary)
}
