//! JSON round trips for the files the CLI reads and writes

use noughts::{
    cli::{
        commands::{
            analyze::{AnalysisReport, analyze_position},
            self_play::{OpponentKind, SeriesSummary, run_series},
        },
        config::PlayConfig,
    },
    session::SessionConfig,
    tictactoe::{Board, Move, Player},
};
use tempfile::tempdir;

#[test]
fn play_config_survives_a_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("play.json");

    let config = PlayConfig::default()
        .with_human(Some(Player::O))
        .with_session(SessionConfig::quiet());
    config.save(&path).unwrap();

    assert_eq!(PlayConfig::load(&path).unwrap(), config);
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = PlayConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, noughts::Error::Io { .. }));
}

#[test]
fn analysis_report_exports_as_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.json");

    let board = Board::from_string("X../XO./...").unwrap();
    let report = analyze_position(&board, Player::O, false).unwrap();
    serde_json::to_writer_pretty(std::fs::File::create(&path).unwrap(), &report).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let loaded: AnalysisReport = serde_json::from_str(&text).unwrap();
    assert_eq!(loaded, report);
    assert_eq!(loaded.best_move, Some(Move::new(2, 0).unwrap()));
    assert_eq!(loaded.board, "X.. / XO. / ...");
}

#[test]
fn seeded_series_is_reproducible() {
    let first = run_series(6, OpponentKind::Random, Some(7), None).unwrap();
    let second = run_series(6, OpponentKind::Random, Some(7), None).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.total_games, 6);
    assert_eq!(first.losses, 0);

    let json = serde_json::to_string(&first).unwrap();
    let loaded: SeriesSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, first);
}
