//! File-backed game database
//!
//! Reads the server's database directory layout:
//!
//! ```text
//! <database>/
//!   templates/quests.json          quest id -> quest
//!   traders/<trader-id>/assort.json  (optional per trader)
//!   locales/global/<lang>.json     one table per language
//! ```
//!
//! Quests and assortments are parsed eagerly; locale tables are parsed the
//! first time they are read.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::locale::{GlobalLocales, LazyLocale, LocaleTable};
use super::types::{QuestTable, Trader, TraderAssort, TraderTable};
use super::{DatabaseService, LocaleService};
use crate::error::{Error, Result};

/// Language used when the host does not choose one
pub const DEFAULT_SERVER_LOCALE: &str = "ch";

/// Language read when the desired one has no table
pub const FALLBACK_LOCALE: &str = "en";

/// Game tables loaded from a server database directory
#[derive(Debug, Default)]
pub struct GameDatabase {
    desired_locale: String,
    quests: QuestTable,
    traders: TraderTable,
    locales: GlobalLocales,
}

impl GameDatabase {
    /// Build a database from already loaded tables
    pub fn new(
        desired_locale: impl Into<String>,
        quests: QuestTable,
        traders: TraderTable,
        locales: GlobalLocales,
    ) -> Self {
        Self {
            desired_locale: desired_locale.into(),
            quests,
            traders,
            locales,
        }
    }

    /// Load a database directory
    ///
    /// # Errors
    /// Returns an error if the directory or `templates/quests.json` is missing,
    /// or if any quest or assortment file is malformed.
    pub fn load<P: AsRef<Path>>(path: P, desired_locale: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(Error::InvalidPath(format!(
                "Database path does not exist: {}",
                path.display()
            )));
        }

        let quests = load_quests(&path.join("templates").join("quests.json"))?;
        let traders = load_traders(&path.join("traders"))?;
        let locales = discover_locales(&path.join("locales").join("global"))?;

        tracing::info!(
            "Loaded database from {}: {} quests, {} traders, {} locales",
            path.display(),
            quests.len(),
            traders.len(),
            locales.len()
        );

        Ok(Self::new(desired_locale, quests, traders, locales))
    }

    /// Write every language, with transformers applied, to `<dir>/locales/global/<lang>.json`
    ///
    /// Returns the number of files written.
    pub fn write_locales<P: AsRef<Path>>(&self, dir: P) -> Result<usize> {
        let out = dir.as_ref().join("locales").join("global");
        std::fs::create_dir_all(&out)?;

        for (language, locale) in &self.locales {
            let table = locale.value()?;
            let text = serde_json::to_string_pretty(&table)?;
            std::fs::write(out.join(format!("{language}.json")), text)?;
        }

        Ok(self.locales.len())
    }
}

impl DatabaseService for GameDatabase {
    fn quests(&self) -> &QuestTable {
        &self.quests
    }

    fn traders(&self) -> &TraderTable {
        &self.traders
    }

    fn global_locales(&self) -> &GlobalLocales {
        &self.locales
    }

    fn global_locales_mut(&mut self) -> &mut GlobalLocales {
        &mut self.locales
    }
}

impl LocaleService for GameDatabase {
    fn desired_locale(&self) -> &str {
        &self.desired_locale
    }

    fn locale_db(&self, language: &str) -> Result<Option<LocaleTable>> {
        self.locales.get(language).map(LazyLocale::value).transpose()
    }
}

fn load_quests(path: &Path) -> Result<QuestTable> {
    if !path.exists() {
        return Err(Error::InvalidPath(format!(
            "Quest templates not found: {}",
            path.display()
        )));
    }
    read_json(path)
}

/// Every subdirectory of `dir` is a trader; `assort.json` is optional
fn load_traders(dir: &Path) -> Result<TraderTable> {
    let mut traders = TraderTable::new();
    if !dir.is_dir() {
        tracing::warn!("No traders directory at {}", dir.display());
        return Ok(traders);
    }

    for trader_dir in sorted_entries(dir)? {
        if !trader_dir.is_dir() {
            continue;
        }
        let Some(id) = file_stem(&trader_dir) else {
            continue;
        };

        let assort_path = trader_dir.join("assort.json");
        let assort = if assort_path.exists() {
            Some(read_json::<TraderAssort>(&assort_path)?)
        } else {
            None
        };

        traders.insert(id, Trader { assort });
    }

    Ok(traders)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| Error::DatabaseFileMalformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Register every `<lang>.json` in `dir` without parsing it
fn discover_locales(dir: &Path) -> Result<GlobalLocales> {
    let mut locales = GlobalLocales::new();
    if !dir.is_dir() {
        tracing::warn!("No global locales directory at {}", dir.display());
        return Ok(locales);
    }

    for path in sorted_entries(dir)? {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if !path.is_file() || !is_json {
            continue;
        }
        if let Some(language) = file_stem(&path) {
            locales.insert(language.clone(), LazyLocale::from_file(language, path));
        }
    }

    Ok(locales)
}

/// Directory entries sorted by name, so database order is stable across platforms
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();
    Ok(entries)
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}
