//! Help popup module
//!
//! Contains the help popup state and content for keyboard shortcuts display.

mod help_content;
mod help_render;
mod help_state;

pub use help_content::{HELP_ENTRIES, HELP_FOOTER};
pub use help_render::render_help_popup;
pub use help_state::HelpPopupState;
