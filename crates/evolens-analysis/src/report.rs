//! Report assembly — one structured record per analytics run.
//!
//! The report is the sole artifact handed to the rendering sink. Assembly
//! is all-or-nothing: every analytic step must succeed before a record
//! exists, so the sink never sees a partially filled report and no file
//! is written on failure.

use crate::history::TrainingHistory;
use crate::improvement::improvement_rate;
use crate::peaks::{find_peaks, Peak};
use crate::stats::{analyze_data, DescriptiveStats};
use crate::trend::{linear_trend, TrendAnalysis};
use evolens_core::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Descriptive statistics of one generation's raw fitness values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: usize,
    #[serde(flatten)]
    pub stats: DescriptiveStats,
}

/// Report provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub report_id: String,
    pub generation_count: usize,
}

/// The assembled training-progress report.
///
/// Trend fields are flattened to the top level (`slope`, `intercept`,
/// `r_squared`, `p_value`, `std_err`, `trend`) — the shape the rendering
/// sink consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    pub metadata: ReportMetadata,
    /// Best-of-generation fitness series.
    pub fitness_data: Vec<f64>,
    pub generation_labels: Vec<usize>,
    /// Per-generation statistics over the raw population fitness values.
    pub generations_report: Vec<GenerationStats>,
    #[serde(flatten)]
    pub trend: TrendAnalysis,
    pub peaks: Vec<Peak>,
    pub improvement_rate: Vec<f64>,
    pub improvement_labels: Vec<usize>,
    pub mean_improvement: f64,
}

impl TrainingReport {
    /// Run the full analytics pipeline over a training history.
    ///
    /// Fails before producing anything if any step fails (fewer than two
    /// generations, an empty generation in the log).
    pub fn assemble(history: &TrainingHistory) -> Result<Self> {
        let fitness_data = history.best_series()?;
        let trend = linear_trend(&fitness_data)?;
        let improvement = improvement_rate(&fitness_data)?;
        let peaks = find_peaks(&fitness_data);

        let mut generations_report = Vec::with_capacity(history.len());
        for (generation, values) in history.generations().iter().enumerate() {
            generations_report.push(GenerationStats {
                generation,
                stats: analyze_data(values)?,
            });
        }

        let generation_labels: Vec<usize> = (0..fitness_data.len()).collect();
        let improvement_labels: Vec<usize> = (1..fitness_data.len()).collect();

        Ok(Self {
            metadata: ReportMetadata {
                report_id: uuid::Uuid::new_v4().to_string(),
                generation_count: history.len(),
            },
            fitness_data,
            generation_labels,
            generations_report,
            trend,
            peaks,
            improvement_rate: improvement.deltas,
            improvement_labels,
            mean_improvement: improvement.mean,
        })
    }

    /// Persist the report as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read a previously persisted report.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let report = serde_json::from_str(&json)?;
        Ok(report)
    }
}
