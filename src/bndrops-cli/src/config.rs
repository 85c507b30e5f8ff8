//! Game definitions file for the bndrops CLI

use anyhow::{Context, Result};
use bndrops::GamesConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// User game definitions and where they live on disk
#[derive(Debug)]
pub struct Config {
    path: PathBuf,
    /// Games from the file only, without presets
    pub games: GamesConfig,
}

impl Config {
    /// Default location of the game definitions file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("bndrops");

        Ok(config_dir.join("games.toml"))
    }

    /// Load from `path` (or the default location). A missing file is empty.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !path.exists() {
            return Ok(Self {
                path,
                games: GamesConfig::default(),
            });
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let games = GamesConfig::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Self { path, games })
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = self
            .games
            .to_toml_string()
            .context("Failed to serialize config")?;

        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write config to {}", self.path.display()))?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Presets overlaid with the file's games
    pub fn resolved(&self) -> GamesConfig {
        self.games.clone().with_presets()
    }
}
