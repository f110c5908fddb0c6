//! Archive summary — the quick after-run check over every snapshot.

use evolens_core::error::Result;
use evolens_core::snapshot::GenomeDoc;
use std::path::Path;

/// Best fitness recorded across all snapshot files in the directory,
/// champion marker included. `None` when no snapshot file is present.
///
/// Non-snapshot JSON artifacts (the history log, a persisted report) are
/// skipped; a snapshot without a fitness field counts as 0.0, matching
/// the trainer's own convention.
pub fn best_recorded_fitness(dir: &Path) -> Result<Option<f64>> {
    let mut best: Option<f64> = None;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "json") {
            continue;
        }
        let Ok(doc) = GenomeDoc::load(&path) else {
            continue;
        };
        let fitness = doc.fitness.unwrap_or(0.0);
        if best.map_or(true, |b| fitness > b) {
            best = Some(fitness);
        }
    }
    Ok(best)
}
