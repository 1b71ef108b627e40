//! CLI command for previewing a single quest

use std::path::Path;

use crate::database::GameDatabase;
use crate::enrich::DescriptionEnricher;
use crate::reference::DescriptionCache;

/// Build and print one quest's description
pub fn execute(
    database: &Path,
    enricher: &DescriptionEnricher,
    quest_id: &str,
    locale: &str,
) -> anyhow::Result<()> {
    let db = GameDatabase::load(database, locale)?;

    let Some(built) = enricher.preview(&db, quest_id)? else {
        anyhow::bail!("quest {quest_id} is not listed in the quest reference file");
    };

    let (cache, _) = DescriptionCache::load(enricher.cache_path())?;
    if cache.contains(quest_id) {
        println!("Note: a cached description exists; `run` will keep using it until the cache is cleared.");
        println!();
    }

    println!("{}", built.text);

    for diagnostic in built.diagnostics.iter() {
        eprintln!("warning: {diagnostic}");
    }

    Ok(())
}
