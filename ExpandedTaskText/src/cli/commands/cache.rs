//! CLI command for cache maintenance

use crate::enrich::DescriptionEnricher;
use crate::reference::clear_cache;

/// Delete the description cache
pub fn clear(enricher: &DescriptionEnricher) -> anyhow::Result<()> {
    if clear_cache(enricher.resources_dir())? {
        println!("Removed {}", enricher.cache_path().display());
    } else {
        println!("No cache at {}", enricher.cache_path().display());
    }
    Ok(())
}
