//! Graphviz DOT export of a genome.
//!
//! Renders every node as a labeled vertex and every connection as a
//! labeled directed edge, laid out left-to-right to follow the network's
//! input→output flow. Enabled connections are drawn solid, disabled ones
//! dotted — both are always emitted, since the silenced lineage is exactly
//! what the diagram is for.
//!
//! The genome is assumed valid (it can only be built through
//! `Genome::from_parts`), so the only failure mode is the destination's
//! own I/O error.

use crate::genome::Genome;
use std::io::{self, Write};

/// Write a genome as a DOT digraph to the destination.
pub fn write_dot<W: Write>(genome: &Genome, out: &mut W) -> io::Result<()> {
    writeln!(out, "digraph G {{")?;
    writeln!(out, "rankdir=LR")?;
    for node in genome.nodes() {
        if node.node_type.is_input() {
            writeln!(out, "{} [label=\"{} {}\"]", node.id, node.id, node.node_type)?;
        } else {
            writeln!(
                out,
                "{} [label=\"{} {} {}\"]",
                node.id, node.id, node.node_type, node.function
            )?;
        }
    }
    for conn in genome.connections() {
        let style = if conn.enabled { "solid" } else { "dotted" };
        writeln!(
            out,
            "{} -> {} [label=\"{}\", style=\"{}\"]",
            conn.from, conn.to, conn.weight, style
        )?;
    }
    writeln!(out, "}}")
}

/// Render a genome as a DOT digraph string.
pub fn to_dot_string(genome: &Genome) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec<u8> cannot fail.
    write_dot(genome, &mut buf).expect("write to Vec cannot fail");
    String::from_utf8(buf).expect("DOT output is UTF-8")
}
