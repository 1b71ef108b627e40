//! Follow-up quests block

use super::context::EnrichmentContext;
use super::diagnostics::Diagnostics;
use crate::database::quest_name_key;

/// Shown when nothing unlocks from this quest
pub const NO_NEXT_QUESTS: &str = "无后续任务";

/// Heading of the follow-up list
pub const NEXT_QUESTS_HEADING: &str = "后续任务:";

/// List the quests whose start conditions require completing `quest_id`
///
/// Entries follow the host quest table's order. A quest that names
/// `quest_id` in several start conditions is listed once per condition.
pub fn next_quests_block(
    ctx: &EnrichmentContext<'_>,
    quest_id: &str,
    diagnostics: &mut Diagnostics,
) -> String {
    let mut entries = Vec::new();

    for (next_id, quest) in ctx.quests {
        let Some(conditions) = &quest.conditions.available_for_start else {
            continue;
        };

        for condition in conditions {
            if condition.requires_quest(quest_id) {
                let name = ctx.lookup(&quest_name_key(next_id), diagnostics);
                entries.push(format!("\n\t{name}"));
            }
        }
    }

    if entries.is_empty() {
        return NO_NEXT_QUESTS.to_string();
    }

    format!("{NEXT_QUESTS_HEADING}{}", entries.join(", "))
}
