//! End-to-end analytics: from a raw history log to a persisted report.

use evolens_analysis::prelude::*;

/// A plausible short CartPole run: noisy early generations, a mid-run
/// spike, steady gains late.
fn history_json() -> &'static str {
    "[[12.0, 30.5, 22.0], [45.0, 18.0, 33.0], [28.0, 41.0, 39.5], \
     [60.0, 55.0, 71.0], [52.0, 49.0, 66.0], [80.0, 95.5, 77.0]]"
}

#[test]
fn full_pipeline_from_log_text() {
    let history = TrainingHistory::parse(history_json()).unwrap();
    let report = TrainingReport::assemble(&history).unwrap();

    assert_eq!(
        report.fitness_data,
        vec![30.5, 45.0, 41.0, 71.0, 66.0, 95.5]
    );
    assert_eq!(report.generation_labels, vec![0, 1, 2, 3, 4, 5]);

    // The run trends upward and the regression should say so.
    assert!(report.trend.slope > 0.0);
    assert_eq!(report.trend.trend, TrendDirection::Increasing);
    assert!(report.trend.r_squared > 0.5);

    // Two interior spikes: generations 1 and 3.
    let peak_indices: Vec<usize> = report.peaks.iter().map(|p| p.index).collect();
    assert_eq!(peak_indices, vec![1, 3]);

    assert_eq!(report.improvement_rate.len(), 5);
    let total: f64 = report.improvement_rate.iter().sum();
    // Telescoping: deltas sum to last - first.
    assert!((total - (95.5 - 30.5)).abs() < 1e-9);
    assert!((report.mean_improvement - total / 5.0).abs() < 1e-12);
}

#[test]
fn per_generation_table_matches_analyze_data() {
    let history = TrainingHistory::parse(history_json()).unwrap();
    let report = TrainingReport::assemble(&history).unwrap();

    for (i, row) in report.generations_report.iter().enumerate() {
        let expected = analyze_data(history.generation(i).unwrap()).unwrap();
        assert_eq!(row.generation, i);
        assert!((row.stats.mean - expected.mean).abs() < 1e-12);
        assert!((row.stats.std - expected.std).abs() < 1e-12);
        assert!(row.stats.min <= row.stats.mean && row.stats.mean <= row.stats.max);
        assert!((row.stats.range - (row.stats.max - row.stats.min)).abs() < 1e-12);
    }
}

#[test]
fn persisted_report_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("training_report.json");

    let history = TrainingHistory::parse(history_json()).unwrap();
    let report = TrainingReport::assemble(&history).unwrap();
    report.save(&path).unwrap();

    let back = TrainingReport::load(&path).unwrap();
    assert_eq!(back.fitness_data, report.fitness_data);
    assert_eq!(back.peaks.len(), report.peaks.len());
    assert_eq!(back.improvement_rate, report.improvement_rate);
    assert_eq!(back.trend.trend, report.trend.trend);
}

#[test]
fn no_file_is_written_when_assembly_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("training_report.json");

    let short = TrainingHistory::new(vec![vec![10.0, 20.0]]);
    let result = TrainingReport::assemble(&short);
    assert!(result.is_err());
    // Assembly failed before anything could be persisted.
    assert!(!path.exists());
}
