//! One-stop imports for the common Evolens workflow.

pub use evolens_analysis::prelude::*;
pub use evolens_archive::{
    best_recorded_fitness, export_champion_dot, export_dot_files, select_best, should_promote,
    update_champion, ChampionRecord, SelectionOutcome, CHAMPION_FILE,
};
pub use evolens_core::prelude::*;
