//! Required keys block

use indexmap::IndexSet;

use super::context::EnrichmentContext;
use super::diagnostics::Diagnostics;
use crate::database::item_name_key;
use crate::reference::{QuestInfo, QuestObjective};

/// Shown when no objective needs a key
pub const NO_KEYS_REQUIRED: &str = "无需钥匙";

/// Heading of the key list
pub const KEYS_REQUIRED_HEADING: &str = "所需钥匙:";

/// List the keys any objective of `info` needs
///
/// Keys are de-duplicated by display name, keeping the first occurrence, and
/// keys without a display name are left out.
pub fn required_keys_block(
    ctx: &EnrichmentContext<'_>,
    info: &QuestInfo,
    diagnostics: &mut Diagnostics,
) -> String {
    let mut names: IndexSet<&str> = IndexSet::new();

    for key in info.quest_objectives.iter().flat_map(QuestObjective::keys) {
        let name = ctx.lookup(&item_name_key(&key.id), diagnostics);
        if !name.is_empty() {
            names.insert(name);
        }
    }

    if names.is_empty() {
        return NO_KEYS_REQUIRED.to_string();
    }

    let entries: Vec<String> = names.iter().map(|name| format!("\n\t{name}")).collect();
    format!("{KEYS_REQUIRED_HEADING}{}", entries.join(", "))
}
