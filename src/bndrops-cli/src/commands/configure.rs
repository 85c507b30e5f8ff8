//! Configuration command handlers
//!
//! Handles the `configure` subcommand for the game definitions file.

use crate::config::Config;
use anyhow::Result;

/// Handle the configure command
///
/// # Arguments
/// * `config` - Loaded game definitions
/// * `show` - Show the config path and every known game
/// * `init` - Write the presets into the config file, keeping user games
pub fn handle(mut config: Config, show: bool, init: bool) -> Result<()> {
    if init {
        config.games = config.resolved();
        config.save()?;
        println!("Game definitions written to: {}", config.path().display());
        return Ok(());
    }

    if show {
        show_config(&config);
    } else {
        show_usage();
    }

    Ok(())
}

fn show_config(config: &Config) {
    println!("Config file: {}", config.path().display());

    for (key, game) in &config.resolved().games {
        let origin = if config.games.games.contains_key(key) {
            "config"
        } else {
            "preset"
        };
        let files: Vec<String> = game
            .tables
            .iter()
            .map(|t| t.drops.display().to_string())
            .collect();
        let number = game
            .number
            .map_or_else(|| "-".to_string(), |n| n.to_string());

        println!(
            "{:<6} game {:<2} {:<7} {}",
            key,
            number,
            origin,
            files.join(", ")
        );
    }
}

fn show_usage() {
    println!("Usage: bndrops configure --show");
    println!("   or: bndrops configure --init");
    println!();
    println!("Game table paths are resolved against --data-dir.");
}
