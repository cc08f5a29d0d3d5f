use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{App, Overlay};
use crate::members;
use crate::purpose;
use crate::switcher;
use crate::switcher::MAX_QUERY_CHARS;

mod global;

/// Timeout for event polling - allows periodic refresh for notification
/// expiry and background worker completions
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        // Background work lands before key handling so a completed DM open
        // or workspace load is visible to this tick's keys
        self.poll_workspace_loader();
        self.poll_dm_responses();

        if self.notification.clear_if_expired() {
            self.mark_dirty();
        }

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                    self.mark_dirty();
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                    self.mark_dirty();
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if global::handle_global_keys(self, key) {
            return;
        }

        // Not a global key, delegate to the active surface
        match self.overlay {
            Overlay::Switcher => switcher::events::handle_switcher_key(self, key),
            Overlay::Members => members::events::handle_members_key(self, key),
            Overlay::Purpose => purpose::events::handle_purpose_key(self, key),
            Overlay::None => self.handle_home_key(key),
        }
    }

    /// Keys on the home view (no overlay active)
    fn handle_home_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('t') if ctrl => self.open_members(),
            KeyCode::Char('e') if ctrl => self.open_purpose_for_current(),
            KeyCode::Char('j') if ctrl => self.quit_with_json(),
            // Message drafts are single-surface; sending is not part of
            // this tool, so Enter is swallowed
            KeyCode::Enter => {}
            _ => {
                self.message_input.input(key);
            }
        }
    }

    /// Handle paste events from bracketed paste mode, routed to the focused
    /// surface with its length bound applied
    fn handle_paste_event(&mut self, text: String) {
        match self.overlay {
            Overlay::Switcher => {
                self.switcher.clear_error();
                let sanitized = text.replace(['\n', '\r'], " ");
                let remaining = MAX_QUERY_CHARS.saturating_sub(self.switcher.query_char_count());
                let clipped: String = sanitized.chars().take(remaining).collect();
                self.switcher.textarea.insert_str(&clipped);
                self.update_switcher_suggestions();
            }
            Overlay::Members => {
                let sanitized = text.replace(['\n', '\r'], " ");
                self.members.search.insert_str(&sanitized);
                self.members.selected = 0;
            }
            Overlay::Purpose => {
                self.purpose.clear_error();
                let remaining =
                    purpose::MAX_PURPOSE_CHARS.saturating_sub(self.purpose.char_count());
                let clipped: String = text.chars().take(remaining).collect();
                self.purpose.textarea.insert_str(&clipped);
            }
            Overlay::None => {
                self.message_input.insert_str(&text);
            }
        }
    }
}
