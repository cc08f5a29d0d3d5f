//! Key handling for the member list surface.

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::messages;

pub fn handle_members_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_overlay();
        }
        KeyCode::Enter => submit(app),
        KeyCode::Up => app.members.move_up(),
        KeyCode::Down => {
            let count = filtered_count(app);
            app.members.move_down(count);
        }
        KeyCode::PageUp => app.members.page_up(),
        KeyCode::PageDown => {
            let count = filtered_count(app);
            app.members.page_down(count);
        }
        _ => {
            if app.members.search.input(key) {
                app.members.selected = 0;
            }
        }
    }
}

fn filtered_count(app: &App) -> usize {
    app.members.filter(&app.member_rows).len()
}

/// Open a direct message to the selected member.
fn submit(app: &mut App) {
    if app.members.is_pending() {
        return;
    }

    let user_id = app
        .members
        .filter(&app.member_rows)
        .get(app.members.selected)
        .map(|row| row.user.id.clone());

    let Some(user_id) = user_id else {
        return;
    };

    match app.request_dm_open(&user_id) {
        Some(generation) => app.members.begin_pending(generation),
        None => app.notification.show_warning(&messages::localize(
            "members.dm_failed",
            "Could not open a direct message",
        )),
    }
}
