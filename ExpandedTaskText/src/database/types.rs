//! Type definitions for the host game database
//!
//! Only the fields the enrichment pass reads are modelled; everything else in
//! the server's JSON is ignored on deserialization.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Condition type marking a quest-completion prerequisite
pub const QUEST_CONDITION_TYPE: &str = "Quest";

/// A quest template from `templates/quests.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quest {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub conditions: QuestConditions,
}

/// Condition groups of a quest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestConditions {
    /// Conditions that must hold before the quest can be started
    #[serde(rename = "AvailableForStart", default)]
    pub available_for_start: Option<Vec<QuestCondition>>,
}

/// A single quest condition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestCondition {
    #[serde(default)]
    pub condition_type: String,
    #[serde(default)]
    pub target: Option<ConditionTarget>,
}

impl QuestCondition {
    /// Whether this condition requires completing `quest_id`
    #[must_use]
    pub fn requires_quest(&self, quest_id: &str) -> bool {
        self.condition_type == QUEST_CONDITION_TYPE
            && self.target.as_ref().and_then(ConditionTarget::item) == Some(quest_id)
    }
}

/// Condition target: the server stores either a single id or a list of ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionTarget {
    Item(String),
    List(Vec<String>),
}

impl ConditionTarget {
    /// The target id when the condition names exactly one
    #[must_use]
    pub fn item(&self) -> Option<&str> {
        match self {
            Self::Item(id) => Some(id.as_str()),
            Self::List(_) => None,
        }
    }
}

/// A trader with its (optional) assortment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trader {
    #[serde(default)]
    pub assort: Option<TraderAssort>,
}

/// What a trader sells, from `traders/<id>/assort.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraderAssort {
    /// Sellable stacks and their attached child items
    #[serde(default)]
    pub items: Option<Vec<AssortItem>>,
    /// Stack id to the loyalty level required to buy it
    #[serde(default)]
    pub loyal_level_items: Option<IndexMap<String, u32>>,
}

impl TraderAssort {
    /// Loyalty level required for the stack with instance id `item_id`
    #[must_use]
    pub fn loyalty_level(&self, item_id: &str) -> Option<u32> {
        self.loyal_level_items.as_ref()?.get(item_id).copied()
    }
}

/// One entry of a trader assortment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssortItem {
    /// Instance id of this stack
    #[serde(rename = "_id")]
    pub id: String,
    /// Item template id
    #[serde(rename = "_tpl")]
    pub template: String,
}

/// Quests keyed by id, in database order
pub type QuestTable = IndexMap<String, Quest>;

/// Traders keyed by id, in database order
pub type TraderTable = IndexMap<String, Trader>;
