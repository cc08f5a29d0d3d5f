//! Channel switcher surface.
//!
//! Owns the free-text query, drives the suggestion provider, and resolves
//! submitted intent into a navigation target: an existing channel, a
//! direct-message open, or an inline not-found error.

pub mod events;
mod render;
pub mod resolve;
mod state;

pub use render::render_switcher;
pub use resolve::{Intent, Resolution};
pub use state::{MAX_QUERY_CHARS, SwitcherState};
