//! CLI command for the full enrichment pass

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{DISK, GEAR, LOOKING_GLASS, WARNING, print_done, print_step, simple_spinner};
use crate::database::GameDatabase;
use crate::enrich::DescriptionEnricher;
use crate::reference::CacheState;

/// Load the database, enrich every quest, and write the transformed locales
pub fn execute(
    database: &Path,
    enricher: &DescriptionEnricher,
    output: &Path,
    locale: &str,
    quiet: bool,
) -> anyhow::Result<()> {
    let start = Instant::now();

    if !quiet {
        print_step(1, 3, LOOKING_GLASS, "Loading server database...");
    }
    let mut db = GameDatabase::load(database, locale)?;

    if !quiet {
        print_step(2, 3, GEAR, "Enriching quest descriptions...");
    }
    let report = enricher.run(&mut db)?;

    if !quiet {
        print_step(3, 3, DISK, "Writing locales...");
    }
    let written = if quiet {
        db.write_locales(output)?
    } else {
        let pb = simple_spinner("Materializing locale tables");
        let written = db.write_locales(output)?;
        pb.finish_and_clear();
        written
    };

    if !quiet {
        println!(
            "  {} quests enriched ({} cached, {} built, {} skipped)",
            report.quests_enriched, report.cache_hits, report.computed, report.skipped
        );
        println!("  {written} locale files written to {}", output.display());
        if report.cache_state == CacheState::FirstRun {
            println!("  Cache created at {}", enricher.cache_path().display());
        }
        if !report.diagnostics.is_empty() {
            println!("{WARNING}{} lookups failed (see log)", report.diagnostics.len());
        }
        print_done(start.elapsed());
    }

    Ok(())
}
