//! Display names for HP-percent band combinations

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One named combination of HP-percent labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HpBand {
    pub labels: BTreeSet<String>,
    /// Shown before the ranks; empty means the drop applies at any HP
    pub name: String,
}

/// Maps the HP labels of a folded entry to the word shown on the wiki
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HpBandNames {
    bands: Vec<HpBand>,
}

impl HpBandNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<I, S>(&mut self, labels: I, name: impl Into<String>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        let name = name.into();
        match self.bands.iter_mut().find(|band| band.labels == labels) {
            Some(band) => band.name = name,
            None => self.bands.push(HpBand { labels, name }),
        }
    }

    /// The 37.5% split used by Battle Network 4 through 6
    pub fn battle_network_4_to_6() -> Self {
        let mut names = Self::new();
        names.insert([">37.5%"], "High");
        names.insert(["<=37.5%"], "Low");
        names.insert([">37.5%", "<=37.5%"], "");
        names
    }

    pub fn name_for(&self, labels: &BTreeSet<String>) -> Option<&str> {
        self.bands
            .iter()
            .find(|band| &band.labels == labels)
            .map(|band| band.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

/// Built-in HP-band naming schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamedHpBands {
    #[serde(rename = "bn4-6")]
    BattleNetwork4To6,
}

/// HP-band names as a game definition gives them: a built-in scheme by
/// name, or an explicit list of `{ labels, name }` tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HpBandPreset {
    Named(NamedHpBands),
    Custom(HpBandNames),
}

impl HpBandPreset {
    pub fn names(&self) -> HpBandNames {
        match self {
            Self::Named(NamedHpBands::BattleNetwork4To6) => HpBandNames::battle_network_4_to_6(),
            Self::Custom(names) => names.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(labels: &[&str]) -> BTreeSet<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bn4_to_6_names() {
        let names = HpBandNames::battle_network_4_to_6();
        assert_eq!(names.len(), 3);
        assert_eq!(names.name_for(&set(&[">37.5%"])), Some("High"));
        assert_eq!(names.name_for(&set(&["<=37.5%"])), Some("Low"));
        assert_eq!(names.name_for(&set(&["<=37.5%", ">37.5%"])), Some(""));
        assert_eq!(names.name_for(&set(&[">50%"])), None);
    }

    #[test]
    fn test_insert_replaces() {
        let mut names = HpBandNames::new();
        names.insert(["a"], "First");
        names.insert(["a"], "Second");
        assert_eq!(names.len(), 1);
        assert_eq!(names.name_for(&set(&["a"])), Some("Second"));
    }

    #[test]
    fn test_toml_shape() {
        #[derive(Deserialize)]
        struct Wrapper {
            hp_bands: HpBandNames,
        }

        let text = r#"
            [[hp_bands]]
            labels = [">37.5%"]
            name = "High"

            [[hp_bands]]
            labels = [">37.5%", "<=37.5%"]
            name = ""
        "#;

        let wrapper: Wrapper = toml::from_str(text).unwrap();
        assert_eq!(wrapper.hp_bands.name_for(&set(&[">37.5%"])), Some("High"));
        assert_eq!(wrapper.hp_bands.name_for(&set(&[">37.5%", "<=37.5%"])), Some(""));
    }

    #[test]
    fn test_preset_forms() {
        #[derive(Deserialize)]
        struct Wrapper {
            hp_bands: HpBandPreset,
        }

        let named: Wrapper = toml::from_str(r#"hp_bands = "bn4-6""#).unwrap();
        assert_eq!(named.hp_bands, HpBandPreset::Named(NamedHpBands::BattleNetwork4To6));
        assert_eq!(named.hp_bands.names(), HpBandNames::battle_network_4_to_6());

        let custom: Wrapper = toml::from_str(
            r#"
            [[hp_bands]]
            labels = [">50%"]
            name = "Healthy"
            "#,
        )
        .unwrap();
        assert_eq!(custom.hp_bands.names().name_for(&set(&[">50%"])), Some("Healthy"));
    }
}
