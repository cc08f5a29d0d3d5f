use tui_textarea::TextArea;

use crate::suggest::SuggestState;

/// Upper bound on the query length, in characters.
pub const MAX_QUERY_CHARS: usize = 64;

/// Transient state of the switcher surface.
///
/// Query, error, and suggestions live exactly as long as one open-to-close
/// span of the surface; `open()` and `close()` both reset them.
pub struct SwitcherState {
    pub open: bool,
    pub textarea: TextArea<'static>,
    pub error: Option<String>,
    pub suggest: SuggestState,
    /// Generation of an in-flight direct-message open, if any
    pending: Option<u64>,
}

impl SwitcherState {
    pub fn new() -> Self {
        Self {
            open: false,
            textarea: TextArea::default(),
            error: None,
            suggest: SuggestState::new(),
            pending: None,
        }
    }

    /// Current query text
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn query_char_count(&self) -> usize {
        self.query().chars().count()
    }

    /// Open the surface with a clean slate
    pub fn open(&mut self) {
        self.open = true;
        self.reset();
    }

    /// Close the surface, discarding its transient state
    pub fn close(&mut self) {
        self.open = false;
        self.reset();
    }

    fn reset(&mut self) {
        self.textarea = TextArea::default();
        self.error = None;
        self.suggest.hide();
        self.pending = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Record an in-flight DM open for the given generation
    pub fn begin_pending(&mut self, generation: u64) {
        self.pending = Some(generation);
    }

    /// Consume the pending marker if it matches the completed generation.
    /// Returns false for stale or unrelated completions.
    pub fn take_pending(&mut self, generation: u64) -> bool {
        if self.pending == Some(generation) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for SwitcherState {
    fn default() -> Self {
        Self::new()
    }
}
