//! # Evolens Core
//!
//! Genome graph model and snapshot formats for Evolens.
//!
//! The training process (an external neuroevolution experiment) persists
//! one file per evaluated specimen. This crate turns those files into one
//! internal shape — the [`genome::Genome`] — and renders it back out:
//!
//! - [`legacy`] — the line-oriented `Node:`/`Connection:` text dialect
//! - [`snapshot`] — the structured JSON dialect, plus the
//!   [`snapshot::SpecimenSnapshot`] (genome + fitness + provenance)
//! - [`dot`] — Graphviz export for the diagram renderer
//!
//! Both parsers converge on [`genome::Genome::from_parts`], the single
//! validation point, so downstream code never branches on the source
//! dialect.

pub mod dot;
pub mod error;
pub mod genome;
pub mod legacy;
pub mod prelude;
pub mod snapshot;
