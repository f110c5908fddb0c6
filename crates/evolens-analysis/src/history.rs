//! Training history — the authoritative multi-generation fitness log.
//!
//! The trainer appends one row per generation, one fitness value per
//! evaluated population member. Generation index is the row position.
//! This side only ever reads it.

use evolens_core::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ordered per-generation fitness log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainingHistory {
    generations: Vec<Vec<f64>>,
}

impl TrainingHistory {
    pub fn new(generations: Vec<Vec<f64>>) -> Self {
        Self { generations }
    }

    /// Deserialize a history log from JSON text.
    pub fn parse(json: &str) -> Result<Self> {
        let history = serde_json::from_str(json)?;
        Ok(history)
    }

    /// Read and deserialize a history log file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::parse(&json)
    }

    /// Number of generations recorded.
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// Raw fitness values of one generation.
    pub fn generation(&self, index: usize) -> Option<&[f64]> {
        self.generations.get(index).map(|g| g.as_slice())
    }

    /// All generations in order.
    pub fn generations(&self) -> &[Vec<f64>] {
        &self.generations
    }

    /// Best fitness per generation, preserving generation order.
    ///
    /// This series is the backbone of every downstream analysis. An empty
    /// generation means the log is truncated; that fails loudly rather
    /// than silently shrinking the series.
    pub fn best_series(&self) -> Result<Vec<f64>> {
        let mut series = Vec::with_capacity(self.generations.len());
        for (index, generation) in self.generations.iter().enumerate() {
            if generation.is_empty() {
                return Err(AnalysisError::EmptyGeneration(index).into());
            }
            let best = generation
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            series.push(best);
        }
        Ok(series)
    }
}
