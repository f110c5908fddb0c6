//! Selection and champion-record tests over a real (temporary) run
//! directory.

use evolens_archive::{
    best_recorded_fitness, export_champion_dot, export_dot_files, select_best, update_champion,
    ChampionRecord, CHAMPION_FILE,
};
use std::path::Path;
use tempfile::TempDir;

fn snapshot_json(fitness: f64) -> String {
    format!(
        r#"{{
    "nodes": [
        {{"id": 0, "type": "Input", "function": "PassThrough"}},
        {{"id": 1, "type": "Output", "function": "Sigmoid"}}
    ],
    "connections": [
        {{"from": 0, "to": 1, "weight": 0.75, "enabled": true}}
    ],
    "fitness": {}
}}"#,
        fitness
    )
}

fn write_snapshot(dir: &Path, name: &str, fitness: f64) {
    std::fs::write(dir.join(name), snapshot_json(fitness)).unwrap();
}

fn run_dir_with(fitnesses: &[(&str, f64)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, fitness) in fitnesses {
        write_snapshot(dir.path(), name, *fitness);
    }
    dir
}

#[test]
fn selects_the_maximal_qualifying_snapshot() {
    let dir = run_dir_with(&[
        ("0_best.json", 5.0),
        ("1_best.json", 8.2),
        ("2_best.json", 3.1),
    ]);
    let selected = select_best(dir.path()).unwrap();
    assert_eq!(selected.fitness, 8.2);
    assert_eq!(selected.source, "1_best.json");
}

#[test]
fn ties_keep_the_first_seen() {
    let dir = run_dir_with(&[("0_best.json", 8.2), ("1_best.json", 8.2)]);
    let selected = select_best(dir.path()).unwrap();
    assert_eq!(selected.source, "0_best.json");
}

#[test]
fn champion_marker_and_worst_files_do_not_qualify() {
    let dir = run_dir_with(&[
        ("0_best.json", 2.0),
        ("0_worst.json", 99.0),
        (CHAMPION_FILE, 50.0),
    ]);
    let selected = select_best(dir.path()).unwrap();
    assert_eq!(selected.fitness, 2.0);
}

#[test]
fn empty_qualifying_set_is_an_error() {
    let dir = run_dir_with(&[("0_worst.json", 1.0), (CHAMPION_FILE, 5.0)]);
    let err = select_best(dir.path()).unwrap_err();
    assert!(err.to_string().contains("no qualifying"));
}

#[test]
fn corrupt_qualifying_snapshot_aborts_the_scan() {
    let dir = run_dir_with(&[("0_best.json", 5.0)]);
    std::fs::write(dir.path().join("1_best.json"), "{not json").unwrap();
    assert!(select_best(dir.path()).is_err());
}

#[test]
fn first_pass_records_a_champion() {
    let dir = run_dir_with(&[("0_best.json", 5.0), ("1_best.json", 8.2)]);
    let outcome = update_champion(dir.path()).unwrap();
    assert!(outcome.promoted);
    assert_eq!(outcome.selected.fitness, 8.2);

    let record = ChampionRecord::in_dir(dir.path());
    assert_eq!(record.fitness().unwrap(), Some(8.2));

    // Promotion copies the snapshot file wholesale.
    let champion = std::fs::read_to_string(dir.path().join(CHAMPION_FILE)).unwrap();
    let source = std::fs::read_to_string(dir.path().join("1_best.json")).unwrap();
    assert_eq!(champion, source);
}

#[test]
fn weaker_champion_is_overtaken() {
    let dir = run_dir_with(&[("0_best.json", 8.2), (CHAMPION_FILE, 7.0)]);
    let outcome = update_champion(dir.path()).unwrap();
    assert!(outcome.promoted);
    assert_eq!(
        ChampionRecord::in_dir(dir.path()).fitness().unwrap(),
        Some(8.2)
    );
}

#[test]
fn stronger_champion_is_retained() {
    let dir = run_dir_with(&[("0_best.json", 8.2), (CHAMPION_FILE, 9.0)]);
    let outcome = update_champion(dir.path()).unwrap();
    assert!(!outcome.promoted);
    assert_eq!(
        ChampionRecord::in_dir(dir.path()).fitness().unwrap(),
        Some(9.0)
    );
}

#[test]
fn update_is_idempotent_and_monotonic() {
    let dir = run_dir_with(&[("0_best.json", 5.0), ("1_best.json", 8.2)]);

    let first = update_champion(dir.path()).unwrap();
    assert!(first.promoted);
    let second = update_champion(dir.path()).unwrap();
    assert!(!second.promoted, "identical rerun must be a no-op");

    // A later, worse generation must not drag the champion down.
    write_snapshot(dir.path(), "2_best.json", 4.0);
    let third = update_champion(dir.path()).unwrap();
    assert!(!third.promoted);
    assert_eq!(
        ChampionRecord::in_dir(dir.path()).fitness().unwrap(),
        Some(8.2)
    );

    // A genuinely better one still gets through.
    write_snapshot(dir.path(), "3_best.json", 12.5);
    let fourth = update_champion(dir.path()).unwrap();
    assert!(fourth.promoted);
    assert_eq!(
        ChampionRecord::in_dir(dir.path()).fitness().unwrap(),
        Some(12.5)
    );
}

#[test]
fn summary_spans_every_snapshot_file() {
    let dir = run_dir_with(&[
        ("0_best.json", 2.0),
        ("0_worst.json", 0.5),
        (CHAMPION_FILE, 50.0),
    ]);
    // Non-snapshot artifacts are skipped, not fatal.
    std::fs::write(dir.path().join("training_history.json"), "[[1,2],[3,4]]").unwrap();
    assert_eq!(best_recorded_fitness(dir.path()).unwrap(), Some(50.0));
}

#[test]
fn summary_of_a_bare_directory_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(best_recorded_fitness(dir.path()).unwrap(), None);
}

#[test]
fn dot_sweep_converts_legacy_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let legacy = "\
Node: 0 Input PassThrough
Node: 1 Output Sigmoid
Connection: 0 1 0.5 True
";
    std::fs::write(dir.path().join("3_best.txt"), legacy).unwrap();
    std::fs::write(dir.path().join("notes.md"), "not a snapshot").unwrap();

    let written = export_dot_files(dir.path()).unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0], dir.path().join("3_best.dot"));

    let dot = std::fs::read_to_string(&written[0]).unwrap();
    assert!(dot.contains("rankdir=LR"));
    assert!(dot.contains("0 -> 1"));
}

#[test]
fn champion_dot_export_requires_a_champion() {
    let dir = run_dir_with(&[("0_best.json", 5.0)]);
    assert_eq!(export_champion_dot(dir.path()).unwrap(), None);

    update_champion(dir.path()).unwrap();
    let path = export_champion_dot(dir.path()).unwrap().unwrap();
    let dot = std::fs::read_to_string(path).unwrap();
    assert!(dot.contains("digraph G {"));
}
