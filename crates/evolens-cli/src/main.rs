//! Evolens CLI - post-process a neuroevolution run directory.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Where the CartPole experiment drops its artifacts by default.
const DEFAULT_RUN_DIR: &str = "SavedSpecimen";

#[derive(Parser)]
#[command(name = "evolens")]
#[command(author, version, about = "Evolens - analyze neuroevolution training runs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select the best specimen of the run and update the champion record
    SelectBest {
        /// Run directory holding the specimen snapshots
        #[arg(short, long, default_value = DEFAULT_RUN_DIR)]
        dir: PathBuf,
    },

    /// Convert specimen snapshots to Graphviz DOT diagrams
    ExportDot {
        /// Run directory holding the specimen snapshots
        #[arg(short, long, default_value = DEFAULT_RUN_DIR)]
        dir: PathBuf,
    },

    /// Assemble the training-progress report from the fitness log
    Report {
        /// Run directory holding training_history.json
        #[arg(short, long, default_value = DEFAULT_RUN_DIR)]
        dir: PathBuf,

        /// Output path for the report (default: <dir>/training_report.json)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show the best fitness recorded anywhere in the run directory
    Summary {
        /// Run directory holding the specimen snapshots
        #[arg(short, long, default_value = DEFAULT_RUN_DIR)]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::SelectBest { dir } => commands::select_best(&dir),
        Commands::ExportDot { dir } => commands::export_dot(&dir),
        Commands::Report { dir, out } => commands::report(&dir, out.as_deref()),
        Commands::Summary { dir } => commands::summary(&dir),
    }
}
