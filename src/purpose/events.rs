//! Key handling for the purpose editor surface.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::MAX_PURPOSE_CHARS;
use super::{ChannelUpdater, UpdateError};
use crate::app::App;
use crate::messages;

pub fn handle_purpose_key(app: &mut App, key: KeyEvent) {
    app.purpose.clear_error();

    if key.code == KeyCode::Esc {
        app.close_overlay();
        return;
    }

    if key.code == KeyCode::Enter {
        // With send_on_ctrl_enter, plain Enter inserts a newline and
        // Ctrl+Enter saves; otherwise Enter saves unless Shift/Alt is held.
        let ctrl_send = app.config.input.send_on_ctrl_enter;
        let saves = if ctrl_send {
            key.modifiers.contains(KeyModifiers::CONTROL)
        } else {
            !key.modifiers
                .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT)
        };

        if saves {
            save(app);
        } else {
            insert_bounded(app, key);
        }
        return;
    }

    insert_bounded(app, key);
}

/// Feed a key into the textarea, ignoring content input at the length bound.
fn insert_bounded(app: &mut App, key: KeyEvent) {
    let grows = matches!(key.code, KeyCode::Char(_) | KeyCode::Enter)
        && !key.modifiers.contains(KeyModifiers::CONTROL);
    if grows && app.purpose.char_count() >= MAX_PURPOSE_CHARS {
        return;
    }
    app.purpose.textarea.input(key);
}

/// Validate and apply the edit through the channel updater.
fn save(app: &mut App) {
    let Some(channel_id) = app.purpose.channel_id.clone() else {
        return;
    };
    let text = app.purpose.text().trim().to_string();

    let Some(workspace) = app.workspace.as_mut() else {
        return;
    };

    match workspace.update_purpose(&channel_id, &text) {
        Ok(channel) => {
            app.channels.update(&channel);
            if app
                .current_channel
                .as_ref()
                .is_some_and(|c| c.id == channel.id)
            {
                app.current_channel = Some(channel);
            }
            app.close_overlay();
            app.notification.show(&messages::localize(
                "purpose.saved",
                "Channel purpose updated",
            ));
        }
        Err(UpdateError::TooLong) => {
            app.purpose.set_error(messages::localize(
                "purpose.too_long",
                "This channel purpose is too long, please enter a shorter one",
            ));
        }
        Err(UpdateError::UnknownChannel) => {
            app.purpose.set_error(messages::localize(
                "purpose.unknown_channel",
                "This channel no longer exists",
            ));
        }
    }
}
