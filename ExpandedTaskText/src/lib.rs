//! # Expanded Task Text
//!
//! Quest description enrichment for SPT servers.
//!
//! Before quest text reaches the client, every quest listed in the bundled
//! `QuestInfo.json` gets a generated block prepended or appended to its lore:
//!
//! - **Meta quests** - whether the quest is required for Collector (Kappa) and Lightkeeper
//! - **Keys** - display names of every key an objective needs
//! - **Follow-ups** - quests that unlock once this one is complete
//! - **Gunsmith** - required parts and which traders sell them at which loyalty level
//!
//! ## Quick Start
//!
//! ```no_run
//! use expanded_task_text::prelude::*;
//!
//! // Load a dumped server database; "ch" is the language the text is built from
//! let mut db = GameDatabase::load("SPT_Data/database", "ch")?;
//!
//! // Enrich every quest, then write the transformed locale tables
//! let report = DescriptionEnricher::new("Resources").run(&mut db)?;
//! db.write_locales("out")?;
//! println!("{} quests enriched ({} from cache)", report.quests_enriched, report.cache_hits);
//! # Ok::<(), expanded_task_text::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `ett` command-line binary

pub mod database;
pub mod enrich;
pub mod error;
pub mod metadata;
pub mod reference;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::database::{
        DatabaseService, GameDatabase, LazyLocale, LocaleService, LocaleTable,
    };
    pub use crate::enrich::{
        BuiltDescription, DescriptionEnricher, Diagnostic, Diagnostics, EnrichmentReport,
    };
    pub use crate::metadata::ModMetadata;
    pub use crate::reference::{DescriptionCache, EttConfig, GunsmithInfo, QuestInfo, ReferenceData};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
