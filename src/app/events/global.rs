use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::state::App;

/// Keys handled regardless of the active surface. Returns true when the key
/// was consumed.
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    // The help popup swallows everything while visible
    if app.help.visible {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => app.help.close(),
            KeyCode::Char('j') | KeyCode::Down => app.help.scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => app.help.scroll.scroll_up(1),
            KeyCode::PageDown => app.help.scroll.scroll_down(10),
            KeyCode::PageUp => app.help.scroll.scroll_up(10),
            KeyCode::Char('g') | KeyCode::Home => app.help.scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => app.help.scroll.jump_to_bottom(),
            _ => {}
        }
        return true;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_switcher();
            true
        }
        KeyCode::F(1) => {
            app.help.toggle();
            true
        }
        _ => false,
    }
}
