//! Diagram sweeps — turn persisted snapshots into DOT files.
//!
//! Legacy `.txt` specimen dumps get a sibling `.dot` file each; the
//! champion snapshot, when present, gets `best_specimen.dot`. The DOT
//! text itself comes from `evolens_core::dot`; this module only owns the
//! run directory's file layout.

use crate::champion::CHAMPION_FILE;
use evolens_core::dot::to_dot_string;
use evolens_core::error::Result;
use evolens_core::legacy::load_legacy;
use evolens_core::snapshot::load_genome;
use std::path::{Path, PathBuf};

/// DOT filename for the champion's diagram.
pub const CHAMPION_DOT_FILE: &str = "best_specimen.dot";

/// Convert every legacy `.txt` snapshot in the directory to a sibling
/// `.dot` file. Returns the paths written, sorted.
pub fn export_dot_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "txt") {
            sources.push(path);
        }
    }
    sources.sort();

    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let genome = load_legacy(&source)?;
        let target = source.with_extension("dot");
        std::fs::write(&target, to_dot_string(&genome))?;
        written.push(target);
    }
    Ok(written)
}

/// Export the champion snapshot's diagram, if a champion is recorded.
/// Returns the path written, or `None` when there is no champion yet.
pub fn export_champion_dot(dir: &Path) -> Result<Option<PathBuf>> {
    let champion = dir.join(CHAMPION_FILE);
    if !champion.exists() {
        return Ok(None);
    }
    let genome = load_genome(&champion)?;
    let target = dir.join(CHAMPION_DOT_FILE);
    std::fs::write(&target, to_dot_string(&genome))?;
    Ok(Some(target))
}
