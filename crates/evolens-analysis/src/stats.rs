//! Descriptive statistics over a fitness sequence.

use evolens_core::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// Summary statistics of one numeric sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptiveStats {
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation (not the sample estimator).
    pub std: f64,
    pub min: f64,
    pub max: f64,
    /// max - min.
    pub range: f64,
}

/// Compute descriptive statistics for a non-empty sequence.
///
/// A single-element sequence has std 0 and range 0. An empty sequence is
/// an error, not a NaN-filled record.
pub fn analyze_data(values: &[f64]) -> Result<DescriptiveStats> {
    if values.is_empty() {
        return Err(AnalysisError::EmptySequence.into());
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(DescriptiveStats {
        mean,
        median: median(values),
        std,
        min,
        max,
        range: max - min,
    })
}

/// True median: the middle element, or the mean of the two middle
/// elements for even lengths. Assumes a non-empty slice.
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
