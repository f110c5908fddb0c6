//! Genome graph model — one evolved network topology.
//!
//! A genome is the network evolved for a single specimen: neurons plus
//! weighted directed connections. Disabled connections stay in the genome
//! (they record lineage) but take no part in forward computation.
//!
//! The graph is backed by petgraph's `Graph` with a HashMap side-index
//! for O(1) node lookup by the external integer id. Connections hold plain
//! node ids, not references, so the genome stays a simple two-table
//! structure: a node table and an edge table.

use crate::error::{FormatError, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::fmt;

/// The role of a node in the evolved network.
///
/// The token set is owned by the training process, so unknown roles are
/// preserved verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Receives an observation value; no activation applied.
    Input,
    /// Produces a network output.
    Output,
    /// Internal node added through mutation.
    Hidden,
    /// Any role this tool does not know by name.
    Other(String),
}

impl NodeType {
    /// Parse a role token. Never fails; unknown tokens land in `Other`.
    pub fn parse(token: &str) -> Self {
        match token {
            "Input" => NodeType::Input,
            "Output" => NodeType::Output,
            "Hidden" => NodeType::Hidden,
            other => NodeType::Other(other.to_string()),
        }
    }

    /// Input nodes carry no activation function worth labeling.
    pub fn is_input(&self) -> bool {
        matches!(self, NodeType::Input)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Input => write!(f, "Input"),
            NodeType::Output => write!(f, "Output"),
            NodeType::Hidden => write!(f, "Hidden"),
            NodeType::Other(token) => write!(f, "{}", token),
        }
    }
}

/// A neuron in the evolved network. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Identity within the genome; unique, assigned by the trainer.
    pub id: u32,
    pub node_type: NodeType,
    /// Activation function name; meaningful only for non-Input nodes.
    pub function: String,
}

impl Node {
    pub fn new(id: u32, node_type: NodeType, function: impl Into<String>) -> Self {
        Self {
            id,
            node_type,
            function: function.into(),
        }
    }
}

/// A weighted directed connection between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub from: u32,
    pub to: u32,
    pub weight: f64,
    /// Disabled connections are kept for lineage but do not participate
    /// in forward computation.
    pub enabled: bool,
}

impl Connection {
    pub fn new(from: u32, to: u32, weight: f64, enabled: bool) -> Self {
        Self {
            from,
            to,
            weight,
            enabled,
        }
    }
}

/// One evolved specimen's network topology.
///
/// Read-only after construction. `from_parts` is the single validation
/// point: duplicate node ids, duplicate `(from, to)` pairs, and dangling
/// node references are all rejected there, so a `Genome` in hand is
/// structurally sound and downstream code performs no checks of its own.
#[derive(Debug, Clone)]
pub struct Genome {
    graph: DiGraph<Node, Connection>,
    /// Map from the external node id to petgraph's internal index.
    node_index: HashMap<u32, NodeIndex>,
}

impl Genome {
    /// Build a genome from parsed parts, enforcing the structural
    /// invariants. No partial genome is ever returned.
    pub fn from_parts(nodes: Vec<Node>, connections: Vec<Connection>) -> Result<Self> {
        let mut graph = DiGraph::with_capacity(nodes.len(), connections.len());
        let mut node_index = HashMap::with_capacity(nodes.len());

        for node in nodes {
            let id = node.id;
            let idx = graph.add_node(node);
            if node_index.insert(id, idx).is_some() {
                return Err(FormatError::DuplicateNode(id).into());
            }
        }

        for conn in connections {
            let (from, to) = (conn.from, conn.to);
            let &from_idx = node_index
                .get(&from)
                .ok_or(FormatError::DanglingReference {
                    from,
                    to,
                    missing: from,
                })?;
            let &to_idx = node_index.get(&to).ok_or(FormatError::DanglingReference {
                from,
                to,
                missing: to,
            })?;
            if graph.find_edge(from_idx, to_idx).is_some() {
                return Err(FormatError::DuplicateConnection(from, to).into());
            }
            graph.add_edge(from_idx, to_idx, conn);
        }

        Ok(Self { graph, node_index })
    }

    /// Look up a node by its external id.
    pub fn node(&self, id: u32) -> Option<&Node> {
        self.node_index.get(&id).map(|idx| &self.graph[*idx])
    }

    /// All nodes, ordered by id.
    pub fn nodes(&self) -> Vec<&Node> {
        let mut nodes: Vec<&Node> = self
            .graph
            .node_indices()
            .map(|idx| &self.graph[idx])
            .collect();
        nodes.sort_by_key(|n| n.id);
        nodes
    }

    /// All connections, in insertion order.
    pub fn connections(&self) -> Vec<&Connection> {
        self.graph.edge_indices().map(|idx| &self.graph[idx]).collect()
    }

    /// Whether a connection exists for the ordered pair.
    pub fn contains_connection(&self, from: u32, to: u32) -> bool {
        match (self.node_index.get(&from), self.node_index.get(&to)) {
            (Some(&f), Some(&t)) => self.graph.find_edge(f, t).is_some(),
            _ => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of connections participating in forward computation.
    pub fn enabled_count(&self) -> usize {
        self.connections().iter().filter(|c| c.enabled).count()
    }

    /// Number of silenced (lineage-only) connections.
    pub fn disabled_count(&self) -> usize {
        self.connections().iter().filter(|c| !c.enabled).count()
    }
}

impl PartialEq for Genome {
    /// Structural equality: same node set, same connection set.
    fn eq(&self, other: &Self) -> bool {
        if self.node_count() != other.node_count()
            || self.connection_count() != other.connection_count()
        {
            return false;
        }
        for node in self.nodes() {
            match other.node(node.id) {
                Some(theirs) if theirs == node => {}
                _ => return false,
            }
        }
        self.connections().iter().all(|conn| {
            other
                .connections()
                .iter()
                .any(|theirs| *theirs == *conn)
        })
    }
}
