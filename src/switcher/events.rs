//! Key handling for the switcher surface.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::CursorMove;

use super::resolve::{self, Resolution};
use super::state::MAX_QUERY_CHARS;
use crate::app::App;
use crate::suggest::{SuggestionKind, dm_marker};

pub fn handle_switcher_key(app: &mut App, key: KeyEvent) {
    // Every keypress clears a previously shown error, whatever it does next
    app.switcher.clear_error();

    match key.code {
        KeyCode::Esc => {
            app.close_overlay();
        }
        KeyCode::Enter => submit(app),
        KeyCode::Down => app.switcher.suggest.select_next(),
        KeyCode::Up => app.switcher.suggest.select_previous(),
        KeyCode::Tab => accept_selected(app),
        _ => {
            if insert_bounded(app, key) {
                app.update_switcher_suggestions();
            }
        }
    }
}

/// Feed a key into the query textarea, ignoring printable input once the
/// query is at its length bound. Editing keys always pass through.
fn insert_bounded(app: &mut App, key: KeyEvent) -> bool {
    if matches!(key.code, KeyCode::Char(_))
        && !key.modifiers.contains(KeyModifiers::CONTROL)
        && app.switcher.query_char_count() >= MAX_QUERY_CHARS
    {
        return false;
    }
    app.switcher.textarea.input(key)
}

/// Replace the query with the selected suggestion's text.
fn accept_selected(app: &mut App) {
    let Some(suggestion) = app.switcher.suggest.selected().cloned() else {
        return;
    };
    app.switcher.textarea.move_cursor(CursorMove::End);
    app.switcher.textarea.delete_line_by_head();
    app.switcher.textarea.insert_str(&suggestion.text);
    app.switcher.suggest.hide();
}

/// Resolve the current input into a navigation target.
///
/// A visible suggestion selection resolves through its typed target; free
/// text falls back to the marker/name parse. A submit while a DM open is in
/// flight is ignored so two resolutions can never race.
fn submit(app: &mut App) {
    if app.switcher.is_pending() {
        return;
    }

    if let Some(suggestion) = app.switcher.suggest.selected().cloned() {
        match suggestion.kind {
            SuggestionKind::Channel { id } => {
                let channel = app
                    .workspace
                    .as_ref()
                    .and_then(|ws| ws.channel_by_id(&id))
                    .cloned();
                match channel {
                    Some(channel) => app.navigate_to(channel),
                    None => fail(app),
                }
            }
            SuggestionKind::DirectMessage { user_id } => request_dm(app, &user_id),
        }
        return;
    }

    let text = app.switcher.query().to_string();
    match resolve::resolve_text(&text, &dm_marker(), &app.channels, &app.users) {
        // Blank input: no resolution, no error
        None => {}
        Some(Resolution::Channel(channel)) => app.navigate_to(channel),
        Some(Resolution::DirectMessageTarget(user)) => request_dm(app, &user.id),
        Some(Resolution::NotFound) => fail(app),
    }
}

fn request_dm(app: &mut App, user_id: &str) {
    match app.request_dm_open(user_id) {
        Some(generation) => app.switcher.begin_pending(generation),
        // No worker behaves like a failed open: fall through to not-found
        None => fail(app),
    }
}

fn fail(app: &mut App) {
    if !app.switcher.query().trim().is_empty() {
        app.switcher.set_error(resolve::not_found_message());
    }
}
