//! Lazily loaded locale tables with deferred transformers
//!
//! The host keeps one table per language and only parses it the first time it
//! is served. Mods never replace a table; they register transformers that run
//! over the parsed table every time it is materialized.

use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Key/value strings of one language, in file order
pub type LocaleTable = IndexMap<String, String>;

/// A function applied to a locale table after it is loaded
pub type LocaleTransformer = Box<dyn Fn(&mut LocaleTable) + Send + Sync>;

/// Locale key of a quest's description
#[must_use]
pub fn quest_description_key(quest_id: &str) -> String {
    format!("{quest_id} description")
}

/// Locale key of a quest's display name
#[must_use]
pub fn quest_name_key(quest_id: &str) -> String {
    format!("{quest_id} name")
}

/// Locale key of an item's display name
#[must_use]
pub fn item_name_key(item_id: &str) -> String {
    format!("{item_id} Name")
}

/// Locale key of a trader's nickname
#[must_use]
pub fn trader_nickname_key(trader_id: &str) -> String {
    format!("{trader_id} Nickname")
}

/// Where the base table comes from
#[derive(Debug, Clone)]
pub enum LocaleSource {
    /// A JSON object on disk, parsed on first access
    File(PathBuf),
    /// An already parsed table
    Table(LocaleTable),
}

/// One language's strings, loaded on demand
pub struct LazyLocale {
    language: String,
    source: LocaleSource,
    base: OnceLock<LocaleTable>,
    transformers: Vec<LocaleTransformer>,
}

impl LazyLocale {
    /// Create a locale backed by a JSON file
    pub fn from_file(language: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::with_source(language, LocaleSource::File(path.into()))
    }

    /// Create a locale from an in-memory table
    pub fn from_table(language: impl Into<String>, table: LocaleTable) -> Self {
        Self::with_source(language, LocaleSource::Table(table))
    }

    fn with_source(language: impl Into<String>, source: LocaleSource) -> Self {
        Self {
            language: language.into(),
            source,
            base: OnceLock::new(),
            transformers: Vec::new(),
        }
    }

    /// Language code of this table
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether the base table has been parsed yet
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.base.get().is_some()
    }

    /// Number of registered transformers
    #[must_use]
    pub fn transformer_count(&self) -> usize {
        self.transformers.len()
    }

    /// Register a transformer, applied in registration order on every [`value`](Self::value)
    pub fn add_transformer<F>(&mut self, transformer: F)
    where
        F: Fn(&mut LocaleTable) + Send + Sync + 'static,
    {
        self.transformers.push(Box::new(transformer));
    }

    /// Materialize the table: the base strings with every transformer applied
    pub fn value(&self) -> Result<LocaleTable> {
        let mut table = self.base()?.clone();
        for transformer in &self.transformers {
            transformer(&mut table);
        }
        Ok(table)
    }

    /// The untransformed strings, parsing the source on first access
    fn base(&self) -> Result<&LocaleTable> {
        if let Some(table) = self.base.get() {
            return Ok(table);
        }

        let table = match &self.source {
            LocaleSource::Table(table) => table.clone(),
            LocaleSource::File(path) => {
                tracing::debug!("Loading locale '{}' from {}", self.language, path.display());
                let text = std::fs::read_to_string(path).map_err(|e| Error::LocaleLoad {
                    language: self.language.clone(),
                    message: format!("{}: {e}", path.display()),
                })?;
                serde_json::from_str(&text).map_err(|e| Error::LocaleLoad {
                    language: self.language.clone(),
                    message: e.to_string(),
                })?
            }
        };

        Ok(self.base.get_or_init(|| table))
    }
}

impl fmt::Debug for LazyLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyLocale")
            .field("language", &self.language)
            .field("loaded", &self.is_loaded())
            .field("transformers", &self.transformers.len())
            .finish_non_exhaustive()
    }
}

/// Every language's table, keyed by language code
pub type GlobalLocales = IndexMap<String, LazyLocale>;
