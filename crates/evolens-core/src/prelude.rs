//! Convenience re-exports for working with genomes and snapshots.

pub use crate::dot::{to_dot_string, write_dot};
pub use crate::error::{AnalysisError, EvolensError, FormatError, Result, SelectionError};
pub use crate::genome::{Connection, Genome, Node, NodeType};
pub use crate::legacy::{load_legacy, parse_legacy};
pub use crate::snapshot::{
    load_genome, load_snapshot, parse_genome, GenomeDoc, SpecimenSnapshot,
};
