//! Per-item dump of one table

use anyhow::{Context, Result};
use bndrops::DropTable;
use std::path::Path;

pub fn handle(drops: &Path, ignored: Option<&Path>, hp_bands: bool, json: bool) -> Result<()> {
    let table = DropTable::from_file(drops, ignored, hp_bands, None)
        .with_context(|| format!("Failed to parse {}", drops.display()))?;

    if json {
        let out = serde_json::to_string_pretty(table.items()).context("Failed to serialize items")?;
        println!("{}", out);
    } else {
        print!("{}", table.render_by_items());
    }

    Ok(())
}
