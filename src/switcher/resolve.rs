//! Free-text intent parsing and resolution.
//!
//! Typed suggestions carry their target explicitly; this module is the
//! fallback for text submitted without a selection. The direct-message
//! marker is detected by substring search, a convention the provider
//! upholds by appending the marker to every DM suggestion and never letting
//! it appear in a channel name.

use memchr::memmem;

use crate::directory::{ChannelDirectory, UserDirectory};
use crate::messages;
use crate::workspace::{Channel, User};

/// What the submitted text asks for, before any directory lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Nothing to do (blank input)
    Empty,
    /// Look the text up as a channel name
    ChannelName(String),
    /// Text carried the DM marker; the part before it is a username
    DirectMessage(String),
}

/// Outcome of resolving submitted text against the directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Channel(Channel),
    DirectMessageTarget(User),
    NotFound,
}

/// The inline error text shown for a not-found resolution.
pub fn not_found_message() -> String {
    messages::localize("switcher.not_found", "No matches found.")
}

/// Parse submitted text into an intent.
///
/// The marker must start past position 0 and be preceded by one separator
/// character, which is dropped from the username.
pub fn parse_intent(text: &str, marker: &str) -> Intent {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Intent::Empty;
    }

    if let Some(idx) = memmem::find(trimmed.as_bytes(), marker.as_bytes())
        && idx > 0
        && let Some(username) = trimmed.get(..idx - 1)
        && !username.is_empty()
    {
        return Intent::DirectMessage(username.to_string());
    }

    Intent::ChannelName(trimmed.to_string())
}

/// Resolve submitted text. Returns None for blank input (no resolution
/// happens and no error is shown). Directory misses funnel into
/// [`Resolution::NotFound`]; they are not errors in themselves.
pub fn resolve_text(
    text: &str,
    marker: &str,
    channels: &ChannelDirectory,
    users: &UserDirectory,
) -> Option<Resolution> {
    match parse_intent(text, marker) {
        Intent::Empty => None,
        Intent::ChannelName(name) => Some(
            channels
                .by_name(&name)
                .cloned()
                .map(Resolution::Channel)
                .unwrap_or(Resolution::NotFound),
        ),
        Intent::DirectMessage(username) => Some(
            users
                .by_username(&username)
                .cloned()
                .map(Resolution::DirectMessageTarget)
                .unwrap_or(Resolution::NotFound),
        ),
    }
}
