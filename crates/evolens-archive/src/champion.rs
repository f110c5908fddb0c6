//! The champion record — the best specimen ever seen in this experiment.
//!
//! The record is a single persisted snapshot (`best.json`) guarded by a
//! compare-and-swap: a candidate replaces it only when the candidate's
//! fitness strictly exceeds the recorded one. That makes the recorded
//! fitness monotonic non-decreasing no matter how often, or in what
//! order, selection runs. "No improvement" is a normal silent outcome,
//! not an error.
//!
//! The guard assumes a single writer (the pipeline runs after the trainer
//! has terminated); it does not arbitrate concurrent writers.

use evolens_core::error::Result;
use evolens_core::snapshot::{load_snapshot, SpecimenSnapshot};
use std::path::{Path, PathBuf};

/// Filename of the persisted champion snapshot inside a run directory.
pub const CHAMPION_FILE: &str = "best.json";

/// Pure half of the guard: promote only on strict improvement.
///
/// `None` means no champion has been recorded yet, so any candidate wins.
pub fn should_promote(current: Option<f64>, candidate: f64) -> bool {
    match current {
        Some(fitness) => candidate > fitness,
        None => true,
    }
}

/// File-backed champion record for one run directory.
#[derive(Debug, Clone)]
pub struct ChampionRecord {
    path: PathBuf,
}

impl ChampionRecord {
    /// The champion record of a run directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(CHAMPION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the recorded champion, or `None` if none has been written.
    pub fn current(&self) -> Result<Option<SpecimenSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        load_snapshot(&self.path).map(Some)
    }

    /// Recorded champion fitness, or `None` if none has been written.
    pub fn fitness(&self) -> Result<Option<f64>> {
        Ok(self.current()?.map(|snapshot| snapshot.fitness))
    }

    /// Guarded promotion: copy the candidate snapshot file over the
    /// record if and only if its fitness strictly exceeds the recorded
    /// one. Returns whether the record changed.
    pub fn challenge(&self, candidate_file: &Path, candidate_fitness: f64) -> Result<bool> {
        if !should_promote(self.fitness()?, candidate_fitness) {
            return Ok(false);
        }
        std::fs::copy(candidate_file, &self.path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_candidate_always_promotes() {
        assert!(should_promote(None, 0.0));
        assert!(should_promote(None, -10.0));
    }

    #[test]
    fn strict_improvement_required() {
        assert!(should_promote(Some(7.0), 8.2));
        assert!(!should_promote(Some(9.0), 8.2));
        assert!(!should_promote(Some(8.2), 8.2));
    }

    #[test]
    fn guard_is_monotonic_under_any_order() {
        // Replay fitness values in an arbitrary order; the recorded value
        // can only ratchet upward.
        let mut recorded: Option<f64> = None;
        for candidate in [5.0, 8.2, 3.1, 8.2, 7.9, 9.0, 1.0, 9.0] {
            let before = recorded;
            if should_promote(recorded, candidate) {
                recorded = Some(candidate);
            }
            if let (Some(b), Some(a)) = (before, recorded) {
                assert!(a >= b);
            }
        }
        assert_eq!(recorded, Some(9.0));
    }
}
