use super::*;
use crate::runner::{create_engine, quick_run, EngineKind};
use tournament_core::TournamentConfig;

fn finished() -> TournamentResults {
    let config = TournamentConfig::new(["Ajax", "Benfica", "Celtic", "Dynamo"])
        .with_name("Spring")
        .with_seed(7);
    quick_run(config).unwrap()
}

#[test]
fn test_display_summary() {
    assert_eq!(finished().to_string(), "Spring Tournament with 4 teams");
}

#[test]
fn test_win_records_match_standings() {
    let results = finished();
    assert_eq!(results.win_records.len(), 4);
    for record in &results.win_records {
        let row = results.standings.row(&record.team).unwrap();
        assert_eq!(record.form.len() as u32, row.stats.played);
        let wins = record.form_string().chars().filter(|c| *c == 'W').count() as u32;
        assert_eq!(wins, row.stats.wins);
    }
}

#[test]
fn test_no_champion_before_completion() {
    let engine = create_engine(
        EngineKind::Baseline,
        TournamentConfig::new(["Ajax", "Benfica"]),
    )
    .unwrap();
    let results = TournamentResults::from_engine(engine.as_ref());
    assert!(!results.is_complete());
    assert_eq!(results.champion(), None);
    assert!(!results.generate_report().contains("Champion"));
}

#[test]
fn test_report_sections() {
    let results = finished();
    let report = results.generate_report();
    assert!(report.starts_with("=== Spring Tournament with 4 teams ==="));
    assert!(report.contains("Fixtures:"));
    assert!(report.contains("Standings:"));
    assert!(report.contains("Win record:"));
    assert!(report.contains(&format!("Champion: {}", results.champion().unwrap())));
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");

    let results = finished();
    results.save(&path).unwrap();
    let loaded = TournamentResults::load(&path).unwrap();
    assert_eq!(loaded, results);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = TournamentResults::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ResultsError::Io { .. }));
}
