//! Command execution implementations

use std::path::Path;

use super::Commands;
use super::{cache, info, preview, run};
use crate::enrich::DescriptionEnricher;

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Run {
                database,
                resources,
                output,
                locale,
                quiet,
            } => run::execute(
                database,
                &enricher(resources.as_deref()),
                output,
                locale,
                *quiet,
            ),
            Commands::Preview {
                quest_id,
                database,
                resources,
                locale,
            } => preview::execute(database, &enricher(resources.as_deref()), quest_id, locale),
            Commands::ClearCache { resources } => cache::clear(&enricher(resources.as_deref())),
            Commands::Info => {
                info::execute();
                Ok(())
            }
        }
    }
}

/// Enricher for an explicit resource directory, or the one next to the executable
fn enricher(resources: Option<&Path>) -> DescriptionEnricher {
    resources.map_or_else(DescriptionEnricher::from_mod_directory, DescriptionEnricher::new)
}
