use clap::Subcommand;
use std::path::PathBuf;

use crate::database::DEFAULT_SERVER_LOCALE;

pub mod cache;
pub mod execute;
pub mod info;
pub mod preview;
pub mod run;

#[derive(Subcommand)]
pub enum Commands {
    /// Enrich every quest description and write the transformed locales
    Run {
        /// Server database directory (containing templates/, traders/, locales/)
        #[arg(short, long)]
        database: PathBuf,

        /// Directory holding QuestInfo.json, GunsmithInfo.json and EttConfig.json
        /// (defaults to Resources/ next to the executable)
        #[arg(short, long)]
        resources: Option<PathBuf>,

        /// Output directory for locales/global/<lang>.json
        #[arg(short, long)]
        output: PathBuf,

        /// Language the generated text is built from
        #[arg(short, long, default_value = DEFAULT_SERVER_LOCALE)]
        locale: String,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print one quest's enriched description without touching the cache
    Preview {
        /// Quest id
        quest_id: String,

        /// Server database directory
        #[arg(short, long)]
        database: PathBuf,

        /// Directory holding the reference files
        #[arg(short, long)]
        resources: Option<PathBuf>,

        /// Language the generated text is built from
        #[arg(short, long, default_value = DEFAULT_SERVER_LOCALE)]
        locale: String,
    },

    /// Delete descriptionCache.json so every description is rebuilt on the next run
    ClearCache {
        /// Directory holding the cache
        #[arg(short, long)]
        resources: Option<PathBuf>,
    },

    /// Show mod metadata
    Info,
}
