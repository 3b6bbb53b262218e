//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ltbr_core::config::Config;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "ltbr")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(about = "Terminal reading companion: track progress, words and notes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text file to read
    file: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print statistics and saved progress for a file
    Stats {
        /// Text file to analyze
        file: PathBuf,

        /// Number of frequent words to list (default from config)
        #[arg(long, value_name = "N")]
        top: Option<usize>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines are flushed
    let _log_guard = logging::init();

    let config = Config::load()?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Some(Commands::Stats { file, top }) => commands::stats::run(&file, top, &config),
        None => match cli.file {
            Some(file) => commands::read::run(&file, config),
            None => anyhow::bail!("no document given\nUsage: ltbr <FILE>"),
        },
    }
}
