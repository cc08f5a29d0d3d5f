//! End-to-end switcher flows driven through key events.

use std::time::Duration;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, OutputMode, Overlay};
use crate::config::Config;
use crate::workspace::Workspace;

fn fixture_workspace() -> Workspace {
    Workspace::parse(
        r#"{
            "self_id": "me1",
            "channels": [
                {"id": "c1", "name": "town-square", "display_name": "Town Square", "purpose": "General chat"},
                {"id": "c2", "name": "dev", "display_name": "Development"},
                {"id": "c3", "name": "dev-ops", "display_name": "Dev Ops"}
            ],
            "users": [
                {"id": "u1", "username": "alice", "first_name": "Alice", "last_name": "Adams"},
                {"id": "u2", "username": "bob"}
            ],
            "members": [
                {"user_id": "u1", "roles": "team_user team_admin"},
                {"user_id": "u2", "roles": "team_user"}
            ]
        }"#,
    )
    .unwrap()
}

fn test_app() -> App {
    App::with_workspace(fixture_workspace(), &Config::default())
}

/// App configured to keep running after a switch, for multi-step flows
fn interactive_app() -> App {
    let mut config = Config::default();
    config.switcher.exit_on_switch = false;
    App::with_workspace(fixture_workspace(), &config)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

/// Poll DM responses until the predicate holds or a timeout elapses
fn wait_for(app: &mut App, pred: impl Fn(&App) -> bool) {
    for _ in 0..400 {
        app.poll_dm_responses();
        if pred(app) {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("condition not reached in time");
}

// =========================================================================
// Channel resolution
// =========================================================================

#[test]
fn test_exact_channel_name_switches_and_closes() {
    let mut app = test_app();
    type_str(&mut app, "town-square");
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.current_channel.as_ref().unwrap().id, "c1");
    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(app.switcher.query(), "");
    assert!(app.switcher.error.is_none());
    assert_eq!(app.output_mode(), Some(OutputMode::Id));
    assert!(app.should_quit());
}

#[test]
fn test_display_name_match_switches_via_suggestion() {
    // "Town" only matches the display name; the typed suggestion carries
    // the channel id so Enter still resolves
    let mut app = test_app();
    type_str(&mut app, "Town");
    assert!(app.switcher.suggest.is_visible());
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.current_channel.as_ref().unwrap().id, "c1");
}

#[test]
fn test_unknown_query_shows_not_found_and_stays_open() {
    let mut app = test_app();
    type_str(&mut app, "zzzz-nope");
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.switcher.error.as_deref(), Some("No matches found."));
    assert_eq!(app.overlay, Overlay::Switcher);
    assert!(app.current_channel.is_none());
    assert!(!app.should_quit());
}

#[test]
fn test_keystroke_clears_error() {
    let mut app = test_app();
    type_str(&mut app, "zzzz-nope");
    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.switcher.error.is_some());

    app.handle_key_event(key(KeyCode::Char('x')));
    assert!(app.switcher.error.is_none());
}

#[test]
fn test_empty_submit_does_nothing() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Enter));

    assert!(app.switcher.error.is_none());
    assert_eq!(app.overlay, Overlay::Switcher);
    assert!(!app.should_quit());
}

#[test]
fn test_whitespace_only_submit_does_nothing() {
    let mut app = test_app();
    type_str(&mut app, "   ");
    app.handle_key_event(key(KeyCode::Enter));

    assert!(app.switcher.error.is_none());
    assert_eq!(app.overlay, Overlay::Switcher);
}

#[test]
fn test_tab_accepts_suggestion_into_query() {
    let mut app = test_app();
    type_str(&mut app, "tow");
    assert!(app.switcher.suggest.is_visible());

    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.switcher.query(), "town-square");
    assert!(!app.switcher.suggest.is_visible());

    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.current_channel.as_ref().unwrap().id, "c1");
}

#[test]
fn test_arrow_keys_change_selection() {
    let mut app = test_app();
    type_str(&mut app, "dev");
    assert!(app.switcher.suggest.suggestions().len() >= 2);

    let first = app.switcher.suggest.selected().unwrap().text.clone();
    app.handle_key_event(key(KeyCode::Down));
    let second = app.switcher.suggest.selected().unwrap().text.clone();
    assert_ne!(first, second);

    app.handle_key_event(key(KeyCode::Up));
    assert_eq!(app.switcher.suggest.selected().unwrap().text, first);
}

#[test]
fn test_query_is_bounded() {
    let mut app = test_app();
    type_str(&mut app, &"a".repeat(100));
    assert_eq!(app.switcher.query_char_count(), 64);
}

// =========================================================================
// Direct messages
// =========================================================================

#[test]
fn test_dm_marker_text_opens_direct_message() {
    let mut app = test_app();
    type_str(&mut app, "alice (Direct Message)");
    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.switcher.is_pending());

    wait_for(&mut app, |app| app.current_channel.is_some());
    let channel = app.current_channel.as_ref().unwrap();
    assert_eq!(channel.name, "me1__u1");
    assert_eq!(app.output_mode(), Some(OutputMode::Id));
    assert!(app.should_quit());
}

#[test]
fn test_dm_marker_with_unknown_user_is_not_found() {
    let mut app = test_app();
    type_str(&mut app, "mallory (Direct Message)");
    app.handle_key_event(key(KeyCode::Enter));

    // The user lookup fails synchronously; same error as a missing channel
    assert_eq!(app.switcher.error.as_deref(), Some("No matches found."));
    assert_eq!(app.overlay, Overlay::Switcher);
    assert!(!app.switcher.is_pending());
}

#[test]
fn test_submit_ignored_while_dm_pending() {
    let mut app = test_app();
    type_str(&mut app, "alice (Direct Message)");
    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.switcher.is_pending());

    // A second Enter while pending must not start another resolution
    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.switcher.is_pending());
    assert!(app.switcher.error.is_none());
}

#[test]
fn test_stale_dm_response_is_dropped_after_close() {
    let mut app = interactive_app();
    type_str(&mut app, "alice (Direct Message)");
    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.switcher.is_pending());

    // Close the surface before the worker answers this generation
    app.handle_key_event(key(KeyCode::Esc));
    assert_eq!(app.overlay, Overlay::None);

    // Give the worker ample time, then drain; the late completion must not
    // navigate anywhere
    std::thread::sleep(Duration::from_millis(300));
    app.poll_dm_responses();
    assert!(app.current_channel.is_none());
    assert!(!app.should_quit());
}

// =========================================================================
// Surface lifecycle
// =========================================================================

#[test]
fn test_open_close_resets_state() {
    let mut app = interactive_app();
    type_str(&mut app, "tow");
    app.handle_key_event(key(KeyCode::Esc));
    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(app.switcher.query(), "");
    assert!(app.switcher.error.is_none());

    // Reopen: still pristine
    app.handle_key_event(ctrl('k'));
    assert_eq!(app.overlay, Overlay::Switcher);
    assert_eq!(app.switcher.query(), "");
}

#[test]
fn test_ctrl_k_toggles_switcher() {
    let mut app = interactive_app();
    app.handle_key_event(ctrl('k'));
    assert_eq!(app.overlay, Overlay::None);
    app.handle_key_event(ctrl('k'));
    assert_eq!(app.overlay, Overlay::Switcher);
}

#[test]
fn test_help_popup_swallows_keys() {
    let mut app = interactive_app();
    app.handle_key_event(key(KeyCode::F(1)));
    assert!(app.help.visible);

    // Keys go to the help popup, not the switcher
    app.handle_key_event(key(KeyCode::Char('x')));
    assert_eq!(app.switcher.query(), "");

    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.help.visible);
    // The switcher is still open underneath
    assert_eq!(app.overlay, Overlay::Switcher);
}

// =========================================================================
// Member list
// =========================================================================

#[test]
fn test_member_list_dm_flow() {
    let mut app = interactive_app();
    app.handle_key_event(key(KeyCode::Esc));
    app.handle_key_event(ctrl('t'));
    assert_eq!(app.overlay, Overlay::Members);

    type_str(&mut app, "ali");
    assert_eq!(app.members.search_query(), "ali");

    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.members.is_pending());

    wait_for(&mut app, |app| app.current_channel.is_some());
    assert_eq!(app.current_channel.as_ref().unwrap().name, "me1__u1");
    assert_eq!(app.overlay, Overlay::None);
}

// =========================================================================
// Purpose editor
// =========================================================================

#[test]
fn test_purpose_edit_flow() {
    let mut app = interactive_app();
    type_str(&mut app, "town-square");
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.current_channel.as_ref().unwrap().id, "c1");

    app.handle_key_event(ctrl('e'));
    assert_eq!(app.overlay, Overlay::Purpose);
    assert_eq!(app.purpose.text(), "General chat");

    type_str(&mut app, " and announcements");
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(
        app.current_channel.as_ref().unwrap().purpose,
        "General chat and announcements"
    );
    assert_eq!(
        app.channels.by_name("town-square").unwrap().purpose,
        "General chat and announcements"
    );
    assert!(app.notification.current().is_some());
}

#[test]
fn test_purpose_save_rejection_shows_error() {
    let mut app = interactive_app();
    type_str(&mut app, "town-square");
    app.handle_key_event(key(KeyCode::Enter));
    app.handle_key_event(ctrl('e'));

    // Force over-long text past the input bound, as a remote rejection would
    app.purpose.textarea.insert_str(&"x".repeat(140));
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.overlay, Overlay::Purpose);
    assert!(
        app.purpose
            .error
            .as_deref()
            .unwrap()
            .contains("purpose is too long")
    );

    // Next keystroke clears the editor error too
    app.handle_key_event(key(KeyCode::Backspace));
    assert!(app.purpose.error.is_none());
}

#[test]
fn test_purpose_ctrl_enter_preference() {
    let mut config = Config::default();
    config.switcher.exit_on_switch = false;
    config.input.send_on_ctrl_enter = true;
    let mut app = App::with_workspace(fixture_workspace(), &config);

    type_str(&mut app, "town-square");
    app.handle_key_event(key(KeyCode::Enter));
    app.handle_key_event(ctrl('e'));

    // Plain Enter inserts a newline instead of saving
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.overlay, Overlay::Purpose);
    assert_eq!(app.purpose.textarea.lines().len(), 2);

    // Ctrl+Enter saves
    app.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL));
    assert_eq!(app.overlay, Overlay::None);
}
