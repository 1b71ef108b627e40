//! Gunsmith parts block

use super::context::EnrichmentContext;
use super::diagnostics::Diagnostics;
use crate::database::{item_name_key, trader_nickname_key};
use crate::reference::GunsmithInfo;

/// Every gunsmith build must meet this durability
pub const REQUIRED_DURABILITY_LINE: &str = "最低耐久度要求: 60";

/// List each required part and which traders sell it at which loyalty level
///
/// Traders are scanned in host order, their stacks in assortment order.
/// Stacks without a loyalty level are not offers and are skipped.
pub fn gunsmith_parts_block(
    ctx: &EnrichmentContext<'_>,
    info: &GunsmithInfo,
    diagnostics: &mut Diagnostics,
) -> String {
    let mut block = String::from(REQUIRED_DURABILITY_LINE);

    for part_id in &info.required_parts {
        block.push('\n');
        block.push_str(ctx.lookup(&item_name_key(part_id), diagnostics));

        for (trader_id, trader) in ctx.traders {
            let Some(assort) = &trader.assort else {
                continue;
            };
            let Some(items) = &assort.items else {
                continue;
            };

            for item in items.iter().filter(|item| item.template == *part_id) {
                if let Some(level) = assort.loyalty_level(&item.id) {
                    let trader_name = ctx.lookup(&trader_nickname_key(trader_id), diagnostics);
                    block.push_str(&format!("\n\t{trader_name} 可购买 (LL{level})"));
                }
            }
        }
    }

    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{AssortItem, LocaleTable, QuestTable, Trader, TraderAssort, TraderTable};
    use crate::reference::ReferenceData;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    fn assort(items: &[(&str, &str)], levels: &[(&str, u32)]) -> TraderAssort {
        TraderAssort {
            items: Some(
                items
                    .iter()
                    .map(|(id, tpl)| AssortItem {
                        id: (*id).to_string(),
                        template: (*tpl).to_string(),
                    })
                    .collect(),
            ),
            loyal_level_items: Some(
                levels
                    .iter()
                    .map(|(id, level)| ((*id).to_string(), *level))
                    .collect::<IndexMap<_, _>>(),
            ),
        }
    }

    fn traders() -> TraderTable {
        let mut traders = TraderTable::new();
        traders.insert(
            "mechanic".to_string(),
            Trader {
                assort: Some(assort(
                    &[("m1", "grip"), ("m2", "stock"), ("m3", "grip")],
                    &[("m1", 1), ("m3", 3)],
                )),
            },
        );
        traders.insert("ragfair".to_string(), Trader { assort: None });
        traders.insert(
            "skier".to_string(),
            Trader {
                assort: Some(TraderAssort {
                    items: Some(vec![AssortItem {
                        id: "s1".to_string(),
                        template: "grip".to_string(),
                    }]),
                    loyal_level_items: None,
                }),
            },
        );
        traders.insert(
            "peacekeeper".to_string(),
            Trader {
                assort: Some(assort(&[("p1", "grip")], &[("p1", 2)])),
            },
        );
        traders
    }

    fn locale() -> LocaleTable {
        [
            ("grip Name", "Pistol grip"),
            ("stock Name", "Stock"),
            ("mechanic Nickname", "Mechanic"),
            ("peacekeeper Nickname", "Peacekeeper"),
        ]
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
    }

    #[test]
    fn test_parts_with_trader_offers() {
        let reference = ReferenceData::default();
        let quests = QuestTable::new();
        let traders = traders();
        let locale = locale();
        let ctx = EnrichmentContext::new(&reference, &quests, &traders, &locale);

        let info = GunsmithInfo {
            required_parts: vec!["grip".to_string(), "stock".to_string()],
        };
        let mut diagnostics = Diagnostics::new();
        let block = gunsmith_parts_block(&ctx, &info, &mut diagnostics);

        assert_eq!(
            block,
            "最低耐久度要求: 60\n\
             Pistol grip\n\
             \tMechanic 可购买 (LL1)\n\
             \tMechanic 可购买 (LL3)\n\
             \tPeacekeeper 可购买 (LL2)\n\
             Stock"
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_no_parts() {
        let reference = ReferenceData::default();
        let quests = QuestTable::new();
        let traders = TraderTable::new();
        let locale = LocaleTable::new();
        let ctx = EnrichmentContext::new(&reference, &quests, &traders, &locale);

        let mut diagnostics = Diagnostics::new();
        let block = gunsmith_parts_block(&ctx, &GunsmithInfo::default(), &mut diagnostics);
        assert_eq!(block, REQUIRED_DURABILITY_LINE);
    }
}
