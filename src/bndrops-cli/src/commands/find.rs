//! Single chip lookup

use super::load_game;
use crate::config::Config;
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle(config: &Config, data_dir: &Path, game: &str, name: &str, code: &str) -> Result<()> {
    let table = load_game(config, data_dir, game)?;

    match table
        .find_chip(name, code)
        .with_context(|| format!("Failed to render locations for '{} {}'", name, code))?
    {
        Some(text) => println!("{}", text),
        None => println!("No drops found for '{} {}' in {}", name, code, game),
    }

    Ok(())
}
