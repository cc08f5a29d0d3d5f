use std::fmt;

/// Typed target of a suggestion.
///
/// Carrying the target here keeps resolution independent of display-text
/// conventions; the marker-substring parse in the switcher exists only as a
/// fallback for free-typed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionKind {
    /// Switch to an existing channel
    Channel { id: String },
    /// Open (or reuse) a direct-message channel with a user
    DirectMessage { user_id: String },
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionKind::Channel { .. } => write!(f, "channel"),
            SuggestionKind::DirectMessage { .. } => write!(f, "dm"),
        }
    }
}

/// A single ranked suggestion
#[derive(Debug, Clone)]
pub struct Suggestion {
    /// The text inserted into the query when accepted
    pub text: String,
    /// Typed target
    pub kind: SuggestionKind,
    /// Optional display label (channel display name, user's full name)
    pub description: Option<String>,
}

impl Suggestion {
    pub fn new(text: impl Into<String>, kind: SuggestionKind) -> Self {
        Self {
            text: text.into(),
            kind,
            description: None,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        let desc = desc.into();
        if !desc.is_empty() {
            self.description = Some(desc);
        }
        self
    }
}

/// State for the suggestion popup
#[derive(Debug, Clone, Default)]
pub struct SuggestState {
    suggestions: Vec<Suggestion>,
    selected_index: usize,
    is_visible: bool,
}

impl SuggestState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update suggestions and show the popup when non-empty
    pub fn update_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.selected_index = 0;
        self.is_visible = !self.suggestions.is_empty();
    }

    /// Hide the popup and drop the current suggestions
    pub fn hide(&mut self) {
        self.is_visible = false;
        self.suggestions.clear();
        self.selected_index = 0;
    }

    /// Move selection down, wrapping at the end
    pub fn select_next(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.suggestions.len();
        }
    }

    /// Move selection up, wrapping at the start
    pub fn select_previous(&mut self) {
        if !self.suggestions.is_empty() {
            if self.selected_index == 0 {
                self.selected_index = self.suggestions.len() - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }

    /// Get the currently selected suggestion
    pub fn selected(&self) -> Option<&Suggestion> {
        if self.is_visible && self.selected_index < self.suggestions.len() {
            Some(&self.suggestions[self.selected_index])
        } else {
            None
        }
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }
}
