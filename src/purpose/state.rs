use tui_textarea::{CursorMove, TextArea};

use crate::workspace::Channel;

/// Upper bound on the purpose text, in characters (newlines included).
pub const MAX_PURPOSE_CHARS: usize = 128;

/// Transient state of the purpose editor surface.
pub struct PurposeState {
    pub open: bool,
    pub textarea: TextArea<'static>,
    pub error: Option<String>,
    pub channel_id: Option<String>,
    /// Label of the channel being edited, for the title
    pub channel_label: String,
}

impl PurposeState {
    pub fn new() -> Self {
        Self {
            open: false,
            textarea: TextArea::default(),
            error: None,
            channel_id: None,
            channel_label: String::new(),
        }
    }

    /// Open the editor pre-filled with a channel's current purpose,
    /// caret at the end.
    pub fn open_for(&mut self, channel: &Channel) {
        self.open = true;
        self.error = None;
        self.channel_id = Some(channel.id.clone());
        self.channel_label = channel.label().to_string();

        let lines: Vec<String> = channel.purpose.lines().map(str::to_string).collect();
        self.textarea = TextArea::new(lines);
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.error = None;
        self.channel_id = None;
        self.channel_label.clear();
        self.textarea = TextArea::default();
    }

    /// The edited purpose text
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn char_count(&self) -> usize {
        self.text().chars().count()
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

impl Default for PurposeState {
    fn default() -> Self {
        Self::new()
    }
}
