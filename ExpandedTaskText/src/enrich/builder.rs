//! Assembly of the enriched quest description

use super::context::EnrichmentContext;
use super::diagnostics::Diagnostics;
use super::gunsmith::gunsmith_parts_block;
use super::keys::required_keys_block;
use super::next_quests::next_quests_block;
use crate::reference::QuestInfo;

pub const KAPPA_REQUIRED: &str = "此任务是 收藏家 的前置任务\n";
pub const KAPPA_NOT_REQUIRED: &str = "此任务不是 收藏家 的前置任务\n";
pub const LIGHTKEEPER_REQUIRED: &str = "此任务是 Lightkeeper 的前置任务\n";
pub const LIGHTKEEPER_NOT_REQUIRED: &str = "此任务不是 Lightkeeper 的前置任务\n";

/// Separator between generated blocks
const BLOCK_SEPARATOR: &str = "\n\n";

/// A built description and the lookups that failed while building it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltDescription {
    pub text: String,
    pub diagnostics: Diagnostics,
}

/// Build the enriched description for `info` around `original_description`
///
/// Block order is fixed: meta-quest lines, required keys, follow-up quests,
/// then gunsmith parts when the quest has a gunsmith entry. The original lore
/// goes first when `DisplayAfterLore` is set and last otherwise.
pub fn build_description(
    ctx: &EnrichmentContext<'_>,
    info: &QuestInfo,
    original_description: &str,
) -> BuiltDescription {
    let display_after_lore = ctx.reference.config.display_after_lore;
    let mut diagnostics = Diagnostics::new();
    let mut text = String::new();

    if display_after_lore {
        text.push_str(original_description);
    }

    text.push_str(if info.kappa_required {
        KAPPA_REQUIRED
    } else {
        KAPPA_NOT_REQUIRED
    });
    text.push_str(if info.lightkeeper_required {
        LIGHTKEEPER_REQUIRED
    } else {
        LIGHTKEEPER_NOT_REQUIRED
    });

    text.push_str(&required_keys_block(ctx, info, &mut diagnostics));
    text.push_str(BLOCK_SEPARATOR);
    text.push_str(&next_quests_block(ctx, &info.id, &mut diagnostics));
    text.push_str(BLOCK_SEPARATOR);

    if let Some(gunsmith) = ctx.reference.gunsmith.get(&info.id) {
        text.push_str(&gunsmith_parts_block(ctx, gunsmith, &mut diagnostics));
        text.push_str(BLOCK_SEPARATOR);
    }

    if !display_after_lore {
        text.push_str(original_description);
    }

    BuiltDescription { text, diagnostics }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{
        ConditionTarget, LocaleTable, Quest, QuestCondition, QuestConditions, QuestTable,
        TraderTable,
    };
    use crate::reference::{EttConfig, GunsmithInfo, KeyInfo, QuestObjective, ReferenceData};
    use pretty_assertions::assert_eq;

    const LORE: &str = "Find the stash.";

    fn q1() -> QuestInfo {
        QuestInfo {
            id: "Q1".to_string(),
            kappa_required: true,
            lightkeeper_required: false,
            quest_objectives: vec![QuestObjective {
                required_keys: Some(vec![Some(vec![KeyInfo {
                    id: "K1".to_string(),
                    name: None,
                }])]),
            }],
        }
    }

    fn quests() -> QuestTable {
        let mut quests = QuestTable::new();
        quests.insert(
            "Q2".to_string(),
            Quest {
                id: "Q2".to_string(),
                conditions: QuestConditions {
                    available_for_start: Some(vec![QuestCondition {
                        condition_type: "Quest".to_string(),
                        target: Some(ConditionTarget::Item("Q1".to_string())),
                    }]),
                },
            },
        );
        quests
    }

    fn locale() -> LocaleTable {
        [("K1 Name", "Red Keycard"), ("Q2 name", "Q2's name"), ("P1 Name", "Barrel")]
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn build(reference: &ReferenceData) -> BuiltDescription {
        let quests = quests();
        let traders = TraderTable::new();
        let locale = locale();
        let ctx = EnrichmentContext::new(reference, &quests, &traders, &locale);
        build_description(&ctx, &q1(), LORE)
    }

    #[test]
    fn test_lore_appended_last() {
        let reference = ReferenceData::default();
        let built = build(&reference);

        assert_eq!(
            built.text,
            "此任务是 收藏家 的前置任务\n\
             此任务不是 Lightkeeper 的前置任务\n\
             所需钥匙:\n\tRed Keycard\
             \n\n\
             后续任务:\n\tQ2's name\
             \n\n\
             Find the stash."
        );
        assert!(built.diagnostics.is_empty());
    }

    #[test]
    fn test_lore_displayed_first() {
        let reference = ReferenceData {
            config: EttConfig {
                display_after_lore: true,
            },
            ..ReferenceData::default()
        };
        let built = build(&reference);

        assert!(built.text.starts_with("Find the stash.此任务是 收藏家"));
        assert!(built.text.ends_with("后续任务:\n\tQ2's name\n\n"));
    }

    #[test]
    fn test_gunsmith_block_only_with_entry() {
        let mut reference = ReferenceData::default();
        reference.gunsmith.insert(
            "Q1".to_string(),
            GunsmithInfo {
                required_parts: vec!["P1".to_string()],
            },
        );
        let built = build(&reference);

        assert!(built.text.ends_with(
            "后续任务:\n\tQ2's name\n\n最低耐久度要求: 60\nBarrel\n\nFind the stash."
        ));
    }
}
