//! Specimen selection — find the best per-generation record in a run.
//!
//! The trainer writes one `<generation>_best.json` snapshot per
//! generation; `best.json` itself is the running champion marker and is
//! excluded from the scan. Selection keeps the strictly greatest fitness,
//! first seen wins ties, and a snapshot that fails to parse aborts the
//! scan — a corrupt archive should be noticed, not skipped over.

use crate::champion::{ChampionRecord, CHAMPION_FILE};
use evolens_core::error::{EvolensError, Result};
use evolens_core::snapshot::{load_snapshot, SpecimenSnapshot};
use std::path::{Path, PathBuf};

/// Suffix marking a generation's best-specimen snapshot.
pub const BEST_SUFFIX: &str = "_best.json";

/// Result of one selection-and-challenge pass.
#[derive(Debug)]
pub struct SelectionOutcome {
    /// The best qualifying specimen of this pass.
    pub selected: SpecimenSnapshot,
    /// Whether the champion record was updated.
    pub promoted: bool,
}

/// Qualifying snapshot files in the run directory, sorted by filename so
/// the first-seen tie-break is deterministic.
pub fn qualifying_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.ends_with(BEST_SUFFIX) && name != CHAMPION_FILE {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Scan the qualifying snapshots and return the one with strictly
/// maximal fitness (ties keep the first seen).
///
/// Fails with a selection error when no snapshot qualifies, and with the
/// parse error of the first unreadable snapshot otherwise.
pub fn select_best(dir: &Path) -> Result<SpecimenSnapshot> {
    let files = qualifying_files(dir)?;
    let mut best: Option<SpecimenSnapshot> = None;
    for file in &files {
        let snapshot = load_snapshot(file)?;
        let improves = match &best {
            Some(current) => snapshot.fitness > current.fitness,
            None => true,
        };
        if improves {
            best = Some(snapshot);
        }
    }
    best.ok_or_else(|| EvolensError::no_candidates(dir.display().to_string()))
}

/// One full selection pass: pick the best qualifying snapshot and
/// challenge the champion record with it.
///
/// Safe to run repeatedly and out of order; the champion record never
/// regresses (see [`crate::champion`]).
pub fn update_champion(dir: &Path) -> Result<SelectionOutcome> {
    let selected = select_best(dir)?;
    let record = ChampionRecord::in_dir(dir);
    let promoted = record.challenge(&dir.join(&selected.source), selected.fitness)?;
    Ok(SelectionOutcome { selected, promoted })
}
