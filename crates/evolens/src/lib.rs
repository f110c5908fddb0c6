//! # Evolens
//!
//! Post-processing toolkit for neuroevolution training runs.
//!
//! An external evolutionary experiment (a CartPole-balancing agent bred
//! through neuroevolution) leaves behind a run directory of specimen
//! snapshots and a multi-generation fitness log. Evolens consumes those
//! artifacts: it parses evolved genomes, selects the all-time champion
//! under a never-regress rule, renders genome diagrams, and assembles a
//! statistical report of training progress.
//!
//! ## Quick Start
//!
//! ```no_run
//! use evolens::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> evolens::Result<()> {
//! let run = Path::new("SavedSpecimen");
//!
//! // Pick the best specimen and challenge the champion record.
//! let outcome = update_champion(run)?;
//! println!("best of run: {} ({})", outcome.selected.fitness, outcome.selected.source);
//!
//! // Analyze the fitness log into a report.
//! let history = TrainingHistory::load(&run.join("training_history.json"))?;
//! let report = TrainingReport::assemble(&history)?;
//! report.save(&run.join("training_report.json"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`evolens_core`] — genome graph model, snapshot parsers, DOT export
//! - [`evolens_analysis`] — training-history analytics and the report
//! - [`evolens_archive`] — run-directory scanning, selection, champion record

pub use evolens_analysis as analysis;
pub use evolens_archive as archive;
pub use evolens_core as core;

pub use evolens_core::error::{EvolensError, Result};

pub mod prelude;
