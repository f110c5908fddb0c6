//! Command implementations for the Evolens CLI.
//!
//! Each command wraps one library entry point, adds path context to
//! errors, and prints a colored status line. The console output also
//! carries the overall descriptive stats of the best-of-generation
//! series, which the persisted report itself does not duplicate.

use anyhow::{Context, Result};
use colored::Colorize;
use evolens::prelude::*;
use std::path::Path;

const HISTORY_FILE: &str = "training_history.json";
const REPORT_FILE: &str = "training_report.json";

/// Run a selection pass and challenge the champion record.
pub fn select_best(dir: &Path) -> Result<()> {
    let outcome = update_champion(dir)
        .with_context(|| format!("selecting best specimen in {}", dir.display()))?;

    println!(
        "{} {} (fitness {})",
        "selected".green().bold(),
        outcome.selected.source,
        outcome.selected.fitness
    );
    if outcome.promoted {
        println!(
            "{} champion record updated ({})",
            "promoted".green().bold(),
            CHAMPION_FILE
        );
    } else {
        println!(
            "{} existing champion stands",
            "retained".yellow().bold()
        );
    }
    Ok(())
}

/// Sweep legacy snapshots (and the champion, if any) into DOT files.
pub fn export_dot(dir: &Path) -> Result<()> {
    let written = export_dot_files(dir)
        .with_context(|| format!("exporting DOT diagrams in {}", dir.display()))?;
    for path in &written {
        println!("{} {}", "wrote".green().bold(), path.display());
    }

    match export_champion_dot(dir)? {
        Some(path) => println!("{} {}", "wrote".green().bold(), path.display()),
        None => println!("{} no champion recorded yet", "skipped".yellow().bold()),
    }

    if written.is_empty() {
        println!("{} no legacy snapshots found", "note".yellow().bold());
    }
    Ok(())
}

/// Assemble and persist the training report.
pub fn report(dir: &Path, out: Option<&Path>) -> Result<()> {
    let history_path = dir.join(HISTORY_FILE);
    let history = TrainingHistory::load(&history_path)
        .with_context(|| format!("loading {}", history_path.display()))?;

    let report = TrainingReport::assemble(&history).context("assembling training report")?;

    let default_out = dir.join(REPORT_FILE);
    let out = out.unwrap_or(&default_out);
    report
        .save(out)
        .with_context(|| format!("writing {}", out.display()))?;

    println!(
        "{} {} generations, trend {} (slope {:.4}, r² {:.3})",
        "analyzed".green().bold(),
        report.metadata.generation_count,
        report.trend.trend,
        report.trend.slope,
        report.trend.r_squared
    );
    let overall = analyze_data(&report.fitness_data)?;
    println!(
        "{} best-of-generation mean {:.2}, median {:.2}, std {:.2}, range {:.2}",
        "overall".green().bold(),
        overall.mean,
        overall.median,
        overall.std,
        overall.range
    );
    println!(
        "{} {} peak(s), mean improvement {:.3}",
        "peaks".green().bold(),
        report.peaks.len(),
        report.mean_improvement
    );
    println!("{} {}", "wrote".green().bold(), out.display());
    Ok(())
}

/// Print the best fitness recorded anywhere in the run directory.
pub fn summary(dir: &Path) -> Result<()> {
    let best = best_recorded_fitness(dir)
        .with_context(|| format!("scanning {}", dir.display()))?;
    match best {
        Some(fitness) => println!(
            "{} best recorded fitness: {}",
            "summary".green().bold(),
            fitness
        ),
        None => println!(
            "{} no specimen snapshots in {}",
            "summary".yellow().bold(),
            dir.display()
        ),
    }
    Ok(())
}
