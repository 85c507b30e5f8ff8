//! Game definitions: which table files make up each game

use crate::error::{DropTableError, Result};
use crate::game::{HpBandPreset, NamedHpBands};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One drop table file and its side files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub drops: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignored_enemies: Option<PathBuf>,
    /// Version label used in wiki tags, e.g. `"6CG"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl TableConfig {
    fn new(drops: &str, ignored_enemies: Option<&str>, version: Option<&str>) -> Self {
        Self {
            drops: drops.into(),
            ignored_enemies: ignored_enemies.map(PathBuf::from),
            version: version.map(str::to_owned),
        }
    }
}

/// A game's tables, number and HP-band names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Picks the reconciliation rule for two-version games
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u8>,
    /// Present for tables whose rows carry HP-percent labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp_bands: Option<HpBandPreset>,
    pub tables: Vec<TableConfig>,
}

/// Game key → definition, as stored in `games.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamesConfig {
    #[serde(default)]
    pub games: BTreeMap<String, GameConfig>,
}

impl GamesConfig {
    /// Definitions for the games whose dumps follow the standard file names
    pub fn presets() -> Self {
        let bn4_bands = Some(HpBandPreset::Named(NamedHpBands::BattleNetwork4To6));

        let games = BTreeMap::from([
            (
                "bn1".to_string(),
                GameConfig {
                    number: Some(1),
                    hp_bands: None,
                    tables: vec![TableConfig::new(
                        "bn1_drops.txt",
                        Some("bn1_ignored_enemies.txt"),
                        None,
                    )],
                },
            ),
            (
                "bn2".to_string(),
                GameConfig {
                    number: Some(2),
                    hp_bands: None,
                    tables: vec![TableConfig::new("bn2_drops.txt", None, None)],
                },
            ),
            (
                "bn4".to_string(),
                GameConfig {
                    number: Some(4),
                    hp_bands: bn4_bands.clone(),
                    tables: vec![
                        TableConfig::new("bn4rs_drops.txt", Some("bn4rs_ignored_enemies.txt"), Some("4RS")),
                        TableConfig::new("bn4bm_drops.txt", Some("bn4bm_ignored_enemies.txt"), Some("4BM")),
                    ],
                },
            ),
            (
                "bn6".to_string(),
                GameConfig {
                    number: Some(6),
                    hp_bands: bn4_bands,
                    tables: vec![
                        TableConfig::new("bn6g_drops.txt", Some("bn6g_ignored_enemies.txt"), Some("6CG")),
                        TableConfig::new("bn6f_drops.txt", Some("bn6f_ignored_enemies.txt"), Some("6CF")),
                    ],
                },
            ),
        ]);

        Self { games }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| DropTableError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| DropTableError::Config(e.to_string()))
    }

    /// Presets, with this config's games replacing any of the same key
    pub fn with_presets(self) -> Self {
        let mut merged = Self::presets();
        merged.games.extend(self.games);
        merged
    }

    pub fn get(&self, key: &str) -> Result<&GameConfig> {
        self.games
            .get(key)
            .ok_or_else(|| DropTableError::UnknownGame(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let presets = GamesConfig::presets();
        let keys: Vec<&str> = presets.games.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["bn1", "bn2", "bn4", "bn6"]);

        let bn1 = presets.get("bn1").unwrap();
        assert!(bn1.hp_bands.is_none());
        assert_eq!(
            bn1.tables[0].ignored_enemies.as_deref(),
            Some(std::path::Path::new("bn1_ignored_enemies.txt"))
        );

        let bn6 = presets.get("bn6").unwrap();
        assert_eq!(bn6.number, Some(6));
        let versions: Vec<_> = bn6.tables.iter().map(|t| t.version.as_deref()).collect();
        assert_eq!(versions, vec![Some("6CG"), Some("6CF")]);
    }

    #[test]
    fn test_unknown_game() {
        let err = GamesConfig::presets().get("bn9").unwrap_err();
        assert!(matches!(err, DropTableError::UnknownGame(ref k) if k == "bn9"));
    }

    #[test]
    fn test_parse_user_config() {
        let text = r#"
            [games.bn5]
            number = 5
            hp_bands = "bn4-6"

            [[games.bn5.tables]]
            drops = "bn5_drops.txt"

            [games.bn2]
            [[games.bn2.tables]]
            drops = "other/bn2.txt"
        "#;

        let config = GamesConfig::from_toml_str(text).unwrap().with_presets();

        let bn5 = config.get("bn5").unwrap();
        assert_eq!(bn5.number, Some(5));
        assert_eq!(
            bn5.hp_bands,
            Some(HpBandPreset::Named(NamedHpBands::BattleNetwork4To6))
        );

        // User entry replaces the preset
        let bn2 = config.get("bn2").unwrap();
        assert_eq!(bn2.number, None);
        assert_eq!(bn2.tables[0].drops, PathBuf::from("other/bn2.txt"));

        assert!(config.get("bn4").is_ok());
    }

    #[test]
    fn test_bad_toml() {
        let err = GamesConfig::from_toml_str("[games.bn5]\nnumber = \"five\"").unwrap_err();
        assert!(matches!(err, DropTableError::Config(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let presets = GamesConfig::presets();
        let text = presets.to_toml_string().unwrap();
        assert!(text.contains("bn4rs_drops.txt"));
        assert_eq!(GamesConfig::from_toml_str(&text).unwrap(), presets);
    }
}
