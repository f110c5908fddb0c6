//! Legacy line-oriented snapshot parser.
//!
//! The training process originally dumped specimens as tagged text lines:
//!
//! ```text
//! Node: 0 Input PassThrough
//! Node: 5 Output Sigmoid
//! Connection: 0 5 -0.2858697 True
//! ```
//!
//! Lines with any other prefix are ignored so newer dumps with extra
//! record kinds still parse. The `enabled` flag must be the case-sensitive
//! literal `True` or `False`; anything else is a format error rather than
//! a silent false.

use crate::error::{FormatError, Result};
use crate::genome::{Connection, Genome, Node, NodeType};
use std::path::Path;

const NODE_TAG: &str = "Node:";
const CONNECTION_TAG: &str = "Connection:";

/// Parse a legacy snapshot into a genome.
///
/// Returns exactly one validated genome or fails without partial output.
pub fn parse_legacy(text: &str) -> Result<Genome> {
    let mut nodes = Vec::new();
    let mut connections = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if let Some(rest) = line.strip_prefix(NODE_TAG) {
            nodes.push(parse_node_line(rest, line_no)?);
        } else if let Some(rest) = line.strip_prefix(CONNECTION_TAG) {
            connections.push(parse_connection_line(rest, line_no)?);
        }
        // Any other prefix: ignored, forward-compatible.
    }

    Genome::from_parts(nodes, connections)
}

/// Read and parse a legacy snapshot file.
pub fn load_legacy(path: &Path) -> Result<Genome> {
    let text = std::fs::read_to_string(path)?;
    parse_legacy(&text)
}

fn parse_node_line(rest: &str, line_no: usize) -> Result<Node> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(FormatError::Truncated { line: line_no }.into());
    }
    let id = parse_u32(tokens[0], line_no)?;
    let node_type = NodeType::parse(tokens[1]);
    Ok(Node::new(id, node_type, tokens[2]))
}

fn parse_connection_line(rest: &str, line_no: usize) -> Result<Connection> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(FormatError::Truncated { line: line_no }.into());
    }
    let from = parse_u32(tokens[0], line_no)?;
    let to = parse_u32(tokens[1], line_no)?;
    let weight = parse_f64(tokens[2], line_no)?;
    let enabled = match tokens[3] {
        "True" => true,
        "False" => false,
        other => {
            return Err(FormatError::BadEnabledFlag {
                line: line_no,
                token: other.to_string(),
            }
            .into())
        }
    };
    Ok(Connection::new(from, to, weight, enabled))
}

fn parse_u32(token: &str, line_no: usize) -> Result<u32> {
    token.parse().map_err(|_| {
        FormatError::BadNumber {
            line: line_no,
            token: token.to_string(),
        }
        .into()
    })
}

fn parse_f64(token: &str, line_no: usize) -> Result<f64> {
    token.parse().map_err(|_| {
        FormatError::BadNumber {
            line: line_no,
            token: token.to_string(),
        }
        .into()
    })
}
