//! Host game database contracts
//!
//! The enrichment pass never owns game data. It reads quests, traders and
//! locales through two small traits that mirror the server's own services:
//!
//! - [`DatabaseService`] - quest and trader tables, and the global locale collection
//! - [`LocaleService`] - the table for the server's desired language
//!
//! [`GameDatabase`] implements both over a dumped server database directory.

mod game_data;
mod locale;
mod types;

pub use game_data::{DEFAULT_SERVER_LOCALE, FALLBACK_LOCALE, GameDatabase};
pub use locale::{
    GlobalLocales, LazyLocale, LocaleSource, LocaleTable, LocaleTransformer, item_name_key,
    quest_description_key, quest_name_key, trader_nickname_key,
};
pub use types::{
    AssortItem, ConditionTarget, QUEST_CONDITION_TYPE, Quest, QuestCondition, QuestConditions,
    QuestTable, Trader, TraderAssort, TraderTable,
};

use crate::error::Result;

/// Read access to game tables, plus the locale collection mods may transform
pub trait DatabaseService {
    /// All quests, in database order
    fn quests(&self) -> &QuestTable;

    /// All traders, in database order
    fn traders(&self) -> &TraderTable;

    /// Every language's locale table
    fn global_locales(&self) -> &GlobalLocales;

    /// Every language's locale table, for registering transformers
    fn global_locales_mut(&mut self) -> &mut GlobalLocales;
}

/// Resolution of locale tables by language
pub trait LocaleService {
    /// Language the server presents to players
    fn desired_locale(&self) -> &str;

    /// Materialized table for `language`, or `None` if the language is unknown
    fn locale_db(&self, language: &str) -> Result<Option<LocaleTable>>;
}
