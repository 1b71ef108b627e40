//! Loading of the bundled reference files

use std::path::Path;

use serde::de::DeserializeOwned;

use super::types::{EttConfig, GunsmithTable, QuestInfo};
use crate::error::{Error, Result};

/// File name of the quest reference list
pub const QUEST_INFO_FILE_NAME: &str = "QuestInfo.json";

/// File name of the gunsmith part table
pub const GUNSMITH_INFO_FILE_NAME: &str = "GunsmithInfo.json";

/// File name of the mod configuration
pub const CONFIG_FILE_NAME: &str = "EttConfig.json";

/// The static tables every enrichment pass needs
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    /// Quests to enrich, in file order
    pub quests: Vec<QuestInfo>,
    /// Gunsmith part requirements keyed by quest id
    pub gunsmith: GunsmithTable,
    /// Mod configuration
    pub config: EttConfig,
}

impl ReferenceData {
    /// Load all three required reference files from `resources_dir`
    ///
    /// # Errors
    /// Fails with [`Error::ReferenceFileMissing`] or
    /// [`Error::ReferenceFileMalformed`] for the first bad file, and with
    /// [`Error::ConfigMissing`] when the configuration file holds `null`.
    pub fn load<P: AsRef<Path>>(resources_dir: P) -> Result<Self> {
        let dir = resources_dir.as_ref();

        let quests: Vec<QuestInfo> = read_required(&dir.join(QUEST_INFO_FILE_NAME))?;
        let gunsmith: GunsmithTable = read_required(&dir.join(GUNSMITH_INFO_FILE_NAME))?;

        let config_path = dir.join(CONFIG_FILE_NAME);
        let config: Option<EttConfig> = read_required(&config_path)?;
        let config = config.ok_or(Error::ConfigMissing { path: config_path })?;

        tracing::debug!(
            "Loaded reference data: {} quests, {} gunsmith entries, display after lore: {}",
            quests.len(),
            gunsmith.len(),
            config.display_after_lore
        );

        Ok(Self {
            quests,
            gunsmith,
            config,
        })
    }
}

/// Read and deserialize a JSON file that must exist
fn read_required<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::ReferenceFileMissing {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| Error::ReferenceFileMalformed {
        path: path.to_path_buf(),
        source,
    })
}
