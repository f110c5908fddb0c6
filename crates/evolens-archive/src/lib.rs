//! # Evolens Archive
//!
//! The run directory side of Evolens: scanning a training run's specimen
//! snapshots, selecting the best one, maintaining the monotonic champion
//! record, and sweeping snapshots into DOT diagrams.
//!
//! Everything here is read-then-write batch work over one run directory,
//! invoked after the trainer has terminated. The only persisted mutable
//! state is the champion record, and its update is a guarded
//! compare-and-swap (see [`champion`]).

pub mod champion;
pub mod select;
pub mod summary;
pub mod sweep;

pub use champion::{should_promote, ChampionRecord, CHAMPION_FILE};
pub use select::{qualifying_files, select_best, update_champion, SelectionOutcome, BEST_SUFFIX};
pub use summary::best_recorded_fitness;
pub use sweep::{export_champion_dot, export_dot_files, CHAMPION_DOT_FILE};
