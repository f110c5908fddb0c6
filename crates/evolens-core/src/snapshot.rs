//! Structured snapshot format — serde wire types and the specimen model.
//!
//! The trainer persists specimens as JSON documents with `nodes`,
//! `connections`, and (for population snapshots) `fitness`. Wire structs
//! keep the node role as a plain string; conversion to [`NodeType`] happens
//! when the document becomes a [`Genome`], so foreign role tokens survive a
//! load/save round trip.

use crate::error::{EvolensError, FormatError, Result};
use crate::genome::{Connection, Genome, Node, NodeType};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Wire form of a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDoc {
    pub id: u32,
    #[serde(rename = "type")]
    pub node_type: String,
    pub function: String,
}

/// Wire form of a connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionDoc {
    pub from: u32,
    pub to: u32,
    pub weight: f64,
    pub enabled: bool,
}

/// Wire form of a genome document.
///
/// `fitness` is present on population snapshots and absent on pure genome
/// exports, so it is optional here; [`load_snapshot`] enforces its presence
/// where a specimen is expected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenomeDoc {
    pub nodes: Vec<NodeDoc>,
    pub connections: Vec<ConnectionDoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness: Option<f64>,
}

impl GenomeDoc {
    /// Deserialize a document from JSON text.
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| EvolensError::Format(FormatError::Malformed(e.to_string())))
    }

    /// Read and deserialize a document from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::parse(&json)
    }

    /// Validate the document into a genome. Consumes the wire form.
    pub fn into_genome(self) -> Result<Genome> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|n| Node::new(n.id, NodeType::parse(&n.node_type), n.function))
            .collect();
        let connections = self
            .connections
            .into_iter()
            .map(|c| Connection::new(c.from, c.to, c.weight, c.enabled))
            .collect();
        Genome::from_parts(nodes, connections)
    }

    /// Build a wire document back from a genome (no fitness attached).
    pub fn from_genome(genome: &Genome) -> Self {
        let nodes = genome
            .nodes()
            .into_iter()
            .map(|n| NodeDoc {
                id: n.id,
                node_type: n.node_type.to_string(),
                function: n.function.clone(),
            })
            .collect();
        let connections = genome
            .connections()
            .into_iter()
            .map(|c| ConnectionDoc {
                from: c.from,
                to: c.to,
                weight: c.weight,
                enabled: c.enabled,
            })
            .collect();
        Self {
            nodes,
            connections,
            fitness: None,
        }
    }
}

/// A genome plus its evaluation result and provenance.
#[derive(Debug, Clone)]
pub struct SpecimenSnapshot {
    pub genome: Genome,
    pub fitness: f64,
    /// Originating filename, kept for reporting.
    pub source: String,
}

/// Parse a structured genome export (fitness not required).
pub fn parse_genome(json: &str) -> Result<Genome> {
    GenomeDoc::parse(json)?.into_genome()
}

/// Read and parse a structured genome export file.
pub fn load_genome(path: &Path) -> Result<Genome> {
    GenomeDoc::load(path)?.into_genome()
}

/// Read a population snapshot file: genome plus mandatory fitness.
pub fn load_snapshot(path: &Path) -> Result<SpecimenSnapshot> {
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let doc = GenomeDoc::load(path)?;
    let fitness = doc
        .fitness
        .ok_or_else(|| EvolensError::Format(FormatError::MissingFitness(source.clone())))?;
    let genome = doc.into_genome()?;
    Ok(SpecimenSnapshot {
        genome,
        fitness,
        source,
    })
}
