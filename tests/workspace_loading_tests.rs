use std::path::PathBuf;
use std::time::Duration;

use chanhop::app::{App, Overlay};
use chanhop::config::Config;
use chanhop::error::ChanhopError;
use chanhop::workspace::WorkspaceLoader;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Drive a loader until its background thread reports a result
fn wait_for_loader(
    loader: &mut WorkspaceLoader,
) -> Result<chanhop::workspace::Workspace, ChanhopError> {
    for _ in 0..200 {
        if let Some(result) = loader.poll() {
            return result;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("loader did not complete in time");
}

#[test]
fn test_fixture_files_exist() {
    assert!(fixture_path("workspace.json").exists());
    assert!(fixture_path("invalid.json").exists());
}

#[test]
fn test_load_fixture_workspace() {
    let mut loader = WorkspaceLoader::spawn_load(fixture_path("workspace.json"));
    let workspace = wait_for_loader(&mut loader).unwrap();

    assert_eq!(workspace.channels.len(), 3);
    assert_eq!(workspace.users.len(), 2);
    assert_eq!(workspace.members.len(), 2);
    assert_eq!(workspace.self_id.as_deref(), Some("me1"));
}

#[test]
fn test_load_invalid_fixture_is_error() {
    let mut loader = WorkspaceLoader::spawn_load(fixture_path("invalid.json"));
    let err = wait_for_loader(&mut loader).unwrap_err();
    assert!(matches!(err, ChanhopError::InvalidWorkspace(_)));
}

#[test]
fn test_app_installs_deferred_workspace() {
    // The app starts empty and opens the switcher once the loader finishes
    let loader = WorkspaceLoader::spawn_load(fixture_path("workspace.json"));
    let mut app = App::new_with_loader(loader, &Config::default());

    assert_eq!(app.overlay, Overlay::None);
    assert!(app.workspace.is_none());

    for _ in 0..200 {
        app.poll_workspace_loader();
        if app.workspace.is_some() {
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    assert!(app.workspace.is_some());
    assert_eq!(app.overlay, Overlay::Switcher);
    assert_eq!(app.channels.len(), 3);
    assert!(app.fatal.is_none());
}

#[test]
fn test_app_records_fatal_on_bad_snapshot() {
    let loader = WorkspaceLoader::spawn_load(fixture_path("invalid.json"));
    let mut app = App::new_with_loader(loader, &Config::default());

    for _ in 0..200 {
        app.poll_workspace_loader();
        if app.fatal.is_some() {
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    assert!(matches!(app.fatal, Some(ChanhopError::InvalidWorkspace(_))));
    assert!(app.should_quit());
}
