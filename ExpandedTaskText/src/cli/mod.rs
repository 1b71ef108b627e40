//! `ett` - run the description enrichment against a dumped server database

pub mod commands;
pub mod progress;

use clap::{ArgAction, Parser};
use commands::Commands;
use tracing::Level;

#[derive(Parser)]
#[command(name = "ett", version)]
#[command(about = "Expanded Task Text: quest description enrichment for SPT", long_about = None)]
struct Cli {
    /// Log verbosity: warnings by default, `-v` for info, `-vv` for debug
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

/// Parse arguments, install the stderr logger and run the chosen command
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `ett preview` output can be piped
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli.command.execute()
}
