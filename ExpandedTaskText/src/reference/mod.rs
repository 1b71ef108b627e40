//! Bundled reference data
//!
//! The mod ships three static tables next to its binary and keeps one
//! generated file alongside them:
//!
//! - `QuestInfo.json` - quests to enrich, with Kappa/Lightkeeper flags and key requirements
//! - `GunsmithInfo.json` - required weapon parts per gunsmith quest
//! - `EttConfig.json` - mod configuration
//! - `descriptionCache.json` - previously generated descriptions (optional)

mod cache;
mod loader;
mod types;

pub use cache::{CACHE_FILE_NAME, CacheState, DescriptionCache, clear_cache};
pub use loader::{CONFIG_FILE_NAME, GUNSMITH_INFO_FILE_NAME, QUEST_INFO_FILE_NAME, ReferenceData};
pub use types::{EttConfig, GunsmithInfo, GunsmithTable, KeyInfo, QuestInfo, QuestObjective};
