//! Suggestion provider and popup state for the switcher surface.

mod provider;
mod state;

pub use provider::{FuzzySuggestionProvider, SuggestionProvider, dm_marker};
pub use state::{SuggestState, Suggestion, SuggestionKind};
