//! Convenience re-exports for the analytics pipeline.

pub use crate::history::TrainingHistory;
pub use crate::improvement::{improvement_rate, ImprovementRate};
pub use crate::peaks::{find_peaks, Peak};
pub use crate::report::{GenerationStats, ReportMetadata, TrainingReport};
pub use crate::stats::{analyze_data, DescriptiveStats};
pub use crate::trend::{linear_trend, TrendAnalysis, TrendDirection};
