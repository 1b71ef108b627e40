//! Persisted quest description cache
//!
//! Maps quest id to the final enriched description. Entries are written once
//! and never recomputed; deleting `descriptionCache.json` is the only way to
//! regenerate them after the reference data changes.

use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// File name of the cache inside the resource directory
pub const CACHE_FILE_NAME: &str = "descriptionCache.json";

/// How the cache was obtained at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheState {
    /// No cache file existed; every description will be computed
    #[default]
    FirstRun,
    /// An existing cache file was read
    Loaded,
}

/// Quest id to enriched description, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionCache {
    entries: IndexMap<String, String>,
}

impl DescriptionCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the cache from `path`
    ///
    /// A missing file is not an error: an empty cache is returned together
    /// with [`CacheState::FirstRun`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<(Self, CacheState)> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok((Self::new(), CacheState::FirstRun));
        }

        let text = std::fs::read_to_string(path)?;
        let entries: IndexMap<String, String> =
            serde_json::from_str(&text).map_err(|source| Error::CacheMalformed {
                path: path.to_path_buf(),
                source,
            })?;

        Ok((Self { entries }, CacheState::Loaded))
    }

    /// Write the cache to `path` as pretty-printed JSON, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Get the cached description for a quest
    #[must_use]
    pub fn get(&self, quest_id: &str) -> Option<&str> {
        self.entries.get(quest_id).map(String::as_str)
    }

    /// Check if a quest already has a cached description
    #[must_use]
    pub fn contains(&self, quest_id: &str) -> bool {
        self.entries.contains_key(quest_id)
    }

    /// Return the cached description, computing and storing it when absent
    ///
    /// The second element is `true` when `compute` ran.
    pub fn get_or_insert_with<F>(&mut self, quest_id: &str, compute: F) -> (&str, bool)
    where
        F: FnOnce() -> String,
    {
        let mut computed = false;
        let text = self
            .entries
            .entry(quest_id.to_string())
            .or_insert_with(|| {
                computed = true;
                compute()
            });
        (text.as_str(), computed)
    }

    /// Get the number of cached descriptions
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(quest_id, description)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Delete the cache file in `resources_dir`, returning whether one existed
pub fn clear_cache<P: AsRef<Path>>(resources_dir: P) -> Result<bool> {
    let path = resources_dir.as_ref().join(CACHE_FILE_NAME);
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_file(path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_first_run() {
        let temp = TempDir::new().unwrap();
        let (cache, state) = DescriptionCache::load(temp.path().join(CACHE_FILE_NAME)).unwrap();
        assert_eq!(state, CacheState::FirstRun);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_save_and_load_keep_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CACHE_FILE_NAME);

        let mut cache = DescriptionCache::new();
        cache.get_or_insert_with("b", || "second".to_string());
        cache.get_or_insert_with("a", || "first".to_string());
        cache.save(&path).unwrap();

        let (loaded, state) = DescriptionCache::load(&path).unwrap();
        assert_eq!(state, CacheState::Loaded);
        let keys: Vec<_> = loaded.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(loaded.get("a"), Some("first"));
    }

    #[test]
    fn test_existing_entry_is_never_recomputed() {
        let mut cache = DescriptionCache::new();
        let (_, computed) = cache.get_or_insert_with("q", || "old".to_string());
        assert!(computed);

        let (text, computed) = cache.get_or_insert_with("q", || "new".to_string());
        assert!(!computed);
        assert_eq!(text, "old");
    }

    #[test]
    fn test_malformed_cache_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CACHE_FILE_NAME);
        std::fs::write(&path, "[1, 2").unwrap();

        let err = DescriptionCache::load(&path).unwrap_err();
        assert!(matches!(err, Error::CacheMalformed { .. }));
        assert!(err.to_string().starts_with("malformed description cache"));
    }

    #[test]
    fn test_clear_cache() {
        let temp = TempDir::new().unwrap();
        assert!(!clear_cache(temp.path()).unwrap());

        DescriptionCache::new().save(temp.path().join(CACHE_FILE_NAME)).unwrap();
        assert!(clear_cache(temp.path()).unwrap());
        assert!(!temp.path().join(CACHE_FILE_NAME).exists());
    }
}
