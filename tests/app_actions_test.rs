//! Integration tests for the application's action handling
//!
//! These drive `BondGridApp` without a UI context, the same way the frame
//! loop applies the actions its views return.

mod common;

use bondgrid_rs::frontend::{load_startup_dataset, AppAction};
use bondgrid_rs::table::SortIndicator;
use bondgrid_rs::{AppConfig, AppState, BondGridApp, TableCommand};
use common::builders::named_bonds;
use common::fixtures::{write_dataset, write_raw};
use std::path::PathBuf;

fn app_with(records: Vec<bondgrid_rs::Instrument>, page_size: usize) -> BondGridApp {
    let config = AppConfig {
        default_page_size: page_size,
        ..AppConfig::default()
    };
    BondGridApp::from_parts(config, AppState::default(), records, None, None)
}

fn names(app: &BondGridApp) -> Vec<String> {
    app.bridge().page_rows().map(|r| r.core.name.clone()).collect()
}

#[test]
fn test_config_page_size_applies() {
    let app = app_with(named_bonds(&["A", "B", "C", "D", "E"]), 2);
    assert_eq!(app.bridge().view().page_size, 2);
    assert_eq!(app.bridge().view().page_count, 3);
}

#[test]
fn test_table_actions_reach_bridge() {
    let mut app = app_with(named_bonds(&["Gamma", "Alpha", "Beta"]), 2);

    app.handle_action(TableCommand::ToggleSort("core.name".to_string()).into());
    assert_eq!(names(&app), vec!["Alpha", "Beta"]);
    assert_eq!(
        app.bridge().sort_indicator("core.name"),
        SortIndicator::Ascending
    );

    app.handle_action(AppAction::Table(TableCommand::NextPage));
    assert_eq!(names(&app), vec!["Gamma"]);

    app.handle_action(AppAction::Table(TableCommand::SetGlobalFilter(
        "BET".to_string(),
    )));
    assert_eq!(names(&app), vec!["Beta"]);
    assert_eq!(app.bridge().view().page_index, 0);
}

#[test]
fn test_open_dataset_replaces_records_and_keeps_view_state() {
    let mut app = app_with(named_bonds(&["Alpha", "Beta", "Gamma"]), 2);
    app.handle_action(TableCommand::SetGlobalFilter("a".to_string()).into());
    app.handle_action(TableCommand::NextPage.into());

    let (_dir, path) = write_dataset(&named_bonds(&["Delta", "Echo", "Foxtrot"]));
    app.handle_action(AppAction::OpenDataset(path.clone()));

    assert_eq!(app.dataset_path(), Some(&path));
    assert_eq!(app.last_error(), None);
    assert_eq!(app.bridge().global_filter(), "a");
    assert_eq!(app.bridge().view().page_index, 0);
    assert_eq!(names(&app), vec!["Delta"]);
    assert_eq!(app.app_state().recent_datasets.first(), Some(&path));
}

#[test]
fn test_failed_open_keeps_records_and_reports() {
    let mut app = app_with(named_bonds(&["Alpha", "Beta"]), 10);
    let (_dir, path) = write_raw("bad.json", "not json");

    app.handle_action(AppAction::OpenDataset(path));

    assert_eq!(names(&app), vec!["Alpha", "Beta"]);
    assert!(app.last_error().is_some_and(|e| e.contains("bad.json")));
    assert_eq!(app.dataset_path(), None);
    assert!(app.app_state().recent_datasets.is_empty());

    app.handle_action(AppAction::ClearError);
    assert_eq!(app.last_error(), None);
}

#[test]
fn test_reload_picks_up_file_changes() {
    let (_dir, path) = write_dataset(&named_bonds(&["Alpha"]));
    let mut app = app_with(Vec::new(), 10);
    app.handle_action(AppAction::OpenDataset(path.clone()));
    assert_eq!(names(&app), vec!["Alpha"]);

    let doc = serde_json::json!({ "data": named_bonds(&["Alpha", "Beta"]) });
    std::fs::write(&path, doc.to_string()).unwrap();
    app.handle_action(AppAction::ReloadDataset);

    assert_eq!(names(&app), vec!["Alpha", "Beta"]);
}

#[test]
fn test_reload_without_dataset_is_noop() {
    let mut app = app_with(named_bonds(&["Alpha"]), 10);
    app.handle_action(AppAction::ReloadDataset);
    assert_eq!(names(&app), vec!["Alpha"]);
    assert_eq!(app.last_error(), None);
}

#[test]
fn test_toggle_dark_mode() {
    let mut app = app_with(Vec::new(), 10);
    let initial = app.config().dark_mode;
    app.handle_action(AppAction::ToggleDarkMode);
    assert_eq!(app.config().dark_mode, !initial);
}

#[test]
fn test_startup_prefers_explicit_path() {
    let (_dir, path) = write_dataset(&named_bonds(&["Alpha", "Beta"]));
    let config = AppConfig {
        dataset_path: PathBuf::from("/nowhere/bonds.json"),
        ..AppConfig::default()
    };

    let (records, used, error) =
        load_startup_dataset(&config, &AppState::default(), Some(path.clone()));
    assert_eq!(records.len(), 2);
    assert_eq!(used, path);
    assert_eq!(error, None);
}

#[test]
fn test_startup_missing_file_degrades_to_empty() {
    let config = AppConfig {
        dataset_path: PathBuf::from("/nowhere/bonds.json"),
        ..AppConfig::default()
    };

    let (records, used, error) = load_startup_dataset(&config, &AppState::default(), None);
    assert!(records.is_empty());
    assert_eq!(used, PathBuf::from("/nowhere/bonds.json"));
    assert!(error.is_some());

    // The table still renders a single empty page.
    let app = BondGridApp::from_parts(config, AppState::default(), records, Some(used), error);
    assert_eq!(app.bridge().view().page_count, 1);
    assert!(app.last_error().is_some());
}

#[test]
fn test_startup_falls_back_to_last_session_dataset() {
    let (_dir, path) = write_dataset(&named_bonds(&["Alpha", "Beta", "Gamma"]));
    let config = AppConfig {
        dataset_path: PathBuf::from("/nowhere/bonds.json"),
        ..AppConfig::default()
    };
    let mut app_state = AppState::default();
    app_state.add_recent_dataset(&path);

    let (records, used, error) = load_startup_dataset(&config, &app_state, None);
    assert_eq!(records.len(), 3);
    assert_eq!(used, path);
    assert_eq!(error, None);

    // An explicit path still wins over the remembered one.
    let (_explicit_dir, explicit) = write_dataset(&named_bonds(&["Delta"]));
    let (records, used, _) =
        load_startup_dataset(&config, &app_state, Some(explicit.clone()));
    assert_eq!(records.len(), 1);
    assert_eq!(used, explicit);
}
