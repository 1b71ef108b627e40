//! Quest description enrichment
//!
//! One sequential pass over every quest in `QuestInfo.json`:
//!
//! 1. Load the description cache and the bundled reference tables
//! 2. For each quest, take its description from the cache or build it
//!    ([`build_description`]) from the desired-locale lore
//! 3. Register a transformer on every language that overwrites
//!    `"<quest-id> description"` with that text
//! 4. Write the cache back to disk
//!
//! # Usage
//!
//! ```no_run
//! use expanded_task_text::database::GameDatabase;
//! use expanded_task_text::enrich::DescriptionEnricher;
//!
//! let mut db = GameDatabase::load("SPT_Data/database", "ch")?;
//! let report = DescriptionEnricher::new("Resources").run(&mut db)?;
//! println!("{} quests enriched", report.quests_enriched);
//! # Ok::<(), expanded_task_text::Error>(())
//! ```

mod applicator;
mod builder;
mod context;
mod diagnostics;
mod gunsmith;
mod keys;
mod next_quests;

pub use applicator::apply_description;
pub use builder::{
    BuiltDescription, KAPPA_NOT_REQUIRED, KAPPA_REQUIRED, LIGHTKEEPER_NOT_REQUIRED,
    LIGHTKEEPER_REQUIRED, build_description,
};
pub use context::EnrichmentContext;
pub use diagnostics::{Diagnostic, Diagnostics};
pub use gunsmith::{REQUIRED_DURABILITY_LINE, gunsmith_parts_block};
pub use keys::{KEYS_REQUIRED_HEADING, NO_KEYS_REQUIRED, required_keys_block};
pub use next_quests::{NEXT_QUESTS_HEADING, NO_NEXT_QUESTS, next_quests_block};

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::database::{
    DatabaseService, FALLBACK_LOCALE, LocaleService, LocaleTable, quest_description_key,
};
use crate::error::Result;
use crate::metadata::{LOG_PREFIX, ModMetadata};
use crate::reference::{CACHE_FILE_NAME, CacheState, DescriptionCache, ReferenceData};

/// Summary of one enrichment pass
#[derive(Debug, Clone, Default)]
pub struct EnrichmentReport {
    /// Whether the cache existed before the pass
    pub cache_state: CacheState,
    /// Quests whose description was written to the locales
    pub quests_enriched: usize,
    /// Descriptions reused from the cache
    pub cache_hits: usize,
    /// Descriptions built during this pass
    pub computed: usize,
    /// Quests skipped because the desired locale has no description for them
    pub skipped: usize,
    /// Number of languages in the locale collection
    pub languages: usize,
    /// Locale entries overwritten (quests x languages)
    pub entries_written: usize,
    /// Recoverable lookup failures, in the order they occurred
    pub diagnostics: Diagnostics,
    /// Wall-clock time of the whole pass
    pub elapsed: Duration,
}

/// Runs the enrichment pass against a host database
#[derive(Debug, Clone)]
pub struct DescriptionEnricher {
    resources_dir: PathBuf,
}

impl DescriptionEnricher {
    /// Create an enricher reading its data files from `resources_dir`
    pub fn new(resources_dir: impl Into<PathBuf>) -> Self {
        Self {
            resources_dir: resources_dir.into(),
        }
    }

    /// Create an enricher using the `Resources` directory next to the executable
    #[must_use]
    pub fn from_mod_directory() -> Self {
        Self::new(ModMetadata::resources_directory())
    }

    #[must_use]
    pub fn resources_dir(&self) -> &Path {
        &self.resources_dir
    }

    /// Path of `descriptionCache.json`
    #[must_use]
    pub fn cache_path(&self) -> PathBuf {
        self.resources_dir.join(CACHE_FILE_NAME)
    }

    /// Load, enrich every quest, apply to every locale and persist the cache
    ///
    /// Diagnostics are logged before returning and also kept in the report.
    ///
    /// # Errors
    /// Fails if a reference file is missing or malformed, the configuration
    /// is null, or the cache cannot be read or written.
    pub fn run<H>(&self, host: &mut H) -> Result<EnrichmentReport>
    where
        H: DatabaseService + LocaleService,
    {
        let start = Instant::now();
        let cache_path = self.cache_path();

        let (mut cache, cache_state) = DescriptionCache::load(&cache_path)?;
        match cache_state {
            CacheState::Loaded => tracing::info!("{LOG_PREFIX} loading please wait..."),
            CacheState::FirstRun => tracing::info!(
                "{LOG_PREFIX} First time loading, subsequent loading times will be significantly lower. Please wait..."
            ),
        }

        let reference = ReferenceData::load(&self.resources_dir)?;

        let mut report = enrich_quests(&reference, &mut cache, host)?;
        report.cache_state = cache_state;
        report.diagnostics.emit_all();

        cache.save(&cache_path)?;

        report.elapsed = start.elapsed();
        tracing::info!(
            "{LOG_PREFIX} Completed loading in {:.2} seconds.",
            report.elapsed.as_secs_f32()
        );

        Ok(report)
    }

    /// Build one quest's description without reading or writing the cache
    ///
    /// Returns `None` if the quest is not in `QuestInfo.json`.
    pub fn preview<H>(&self, host: &H, quest_id: &str) -> Result<Option<BuiltDescription>>
    where
        H: DatabaseService + LocaleService,
    {
        let reference = ReferenceData::load(&self.resources_dir)?;
        preview_quest(&reference, host, quest_id)
    }
}

/// Enrich every reference quest, using and filling `cache`
///
/// This is the pass without file I/O. Diagnostics are returned in the
/// report, not logged.
pub fn enrich_quests<H>(
    reference: &ReferenceData,
    cache: &mut DescriptionCache,
    host: &mut H,
) -> Result<EnrichmentReport>
where
    H: DatabaseService + LocaleService,
{
    let mut report = EnrichmentReport::default();
    let locale = desired_locale_table(host, &mut report.diagnostics)?;
    let mut resolved: Vec<(&str, String)> = Vec::with_capacity(reference.quests.len());

    let ctx = EnrichmentContext::new(reference, host.quests(), host.traders(), &locale);
    for info in &reference.quests {
        let Some(original) = locale.get(&quest_description_key(&info.id)) else {
            report.diagnostics.push(Diagnostic::MissingQuestDescription {
                quest_id: info.id.clone(),
            });
            report.skipped += 1;
            continue;
        };

        let (text, computed) = cache.get_or_insert_with(&info.id, || {
            let built = build_description(&ctx, info, original);
            report.diagnostics.extend(built.diagnostics);
            built.text
        });

        if computed {
            tracing::debug!("Built description for {}", info.id);
            report.computed += 1;
        } else {
            report.cache_hits += 1;
        }
        resolved.push((info.id.as_str(), text.to_string()));
    }

    let locales = host.global_locales_mut();
    for (quest_id, text) in &resolved {
        report.entries_written += apply_description(locales, quest_id, text);
    }

    report.quests_enriched = resolved.len();
    report.languages = locales.len();
    Ok(report)
}

/// Build one reference quest's description against the host, without the cache
pub fn preview_quest<H>(
    reference: &ReferenceData,
    host: &H,
    quest_id: &str,
) -> Result<Option<BuiltDescription>>
where
    H: DatabaseService + LocaleService,
{
    let Some(info) = reference.quests.iter().find(|q| q.id == quest_id) else {
        return Ok(None);
    };

    let mut missing = Diagnostics::new();
    let locale = desired_locale_table(host, &mut missing)?;
    let ctx = EnrichmentContext::new(reference, host.quests(), host.traders(), &locale);

    let original = match locale.get(&quest_description_key(quest_id)) {
        Some(text) => text.as_str(),
        None => {
            missing.push(Diagnostic::MissingQuestDescription {
                quest_id: quest_id.to_string(),
            });
            ""
        }
    };

    let mut built = build_description(&ctx, info, original);
    missing.extend(built.diagnostics);
    built.diagnostics = missing;
    Ok(Some(built))
}

/// The desired locale, else [`FALLBACK_LOCALE`], else an empty table
///
/// With an empty table every quest lacks its description and is skipped, so
/// the pass still completes and saves the cache.
fn desired_locale_table<H: LocaleService>(
    host: &H,
    diagnostics: &mut Diagnostics,
) -> Result<LocaleTable> {
    let language = host.desired_locale();
    if let Some(table) = host.locale_db(language)? {
        return Ok(table);
    }

    let fallback = if language == FALLBACK_LOCALE {
        None
    } else {
        host.locale_db(FALLBACK_LOCALE)?
    };
    diagnostics.push(Diagnostic::DesiredLocaleMissing {
        language: language.to_string(),
        fallback: fallback.as_ref().map(|_| FALLBACK_LOCALE.to_string()),
    });
    Ok(fallback.unwrap_or_default())
}
