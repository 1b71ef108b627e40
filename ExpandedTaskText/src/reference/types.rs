//! Type definitions for the bundled reference tables

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Static descriptor of one quest, as listed in `QuestInfo.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestInfo {
    /// Quest identifier (24-char hex id)
    pub id: String,
    /// Required for the Collector ("Kappa") meta quest
    #[serde(default)]
    pub kappa_required: bool,
    /// Required for the Lightkeeper meta quest
    #[serde(default)]
    pub lightkeeper_required: bool,
    /// Objectives in display order
    #[serde(default, rename = "objectives", alias = "questObjectives")]
    pub quest_objectives: Vec<QuestObjective>,
}

/// A single quest objective
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestObjective {
    /// Alternative key groups; any key of a group opens the same lock.
    /// Both the outer list and individual groups may be `null`.
    #[serde(default)]
    pub required_keys: Option<Vec<Option<Vec<KeyInfo>>>>,
}

impl QuestObjective {
    /// Iterate over every key of every non-null group, in file order
    pub fn keys(&self) -> impl Iterator<Item = &KeyInfo> {
        self.required_keys
            .iter()
            .flatten()
            .flatten()
            .flatten()
    }
}

/// Reference to a key item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyInfo {
    /// Item template id
    pub id: String,
    /// English name, informational only (display names come from the locale)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Gunsmith part requirements for one quest, as listed in `GunsmithInfo.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GunsmithInfo {
    /// Item template ids of the parts to install, in display order
    #[serde(default)]
    pub required_parts: Vec<String>,
}

/// Gunsmith entries keyed by quest id
pub type GunsmithTable = IndexMap<String, GunsmithInfo>;

/// Mod configuration from `EttConfig.json`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EttConfig {
    /// Emit the original lore before the generated block instead of after it
    #[serde(default, rename = "DisplayAfterLore", alias = "displayAfterLore")]
    pub display_after_lore: bool,
}
