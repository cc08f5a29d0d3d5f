//! Channel purpose editor surface.
//!
//! Edits the current channel's purpose text through the [`ChannelUpdater`]
//! seam. The in-memory updater on [`Workspace`] enforces the same length
//! bound the editor enforces on input, so a rejected save surfaces the same
//! inline error a remote backend would produce.

pub mod events;
mod render;
mod state;

pub use render::render_purpose;
pub use state::{MAX_PURPOSE_CHARS, PurposeState};

use crate::workspace::{Channel, Workspace};

/// Why a purpose update was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateError {
    TooLong,
    UnknownChannel,
}

/// Applies purpose edits to a channel store.
pub trait ChannelUpdater {
    fn update_purpose(&mut self, channel_id: &str, purpose: &str)
    -> Result<Channel, UpdateError>;
}

impl ChannelUpdater for Workspace {
    fn update_purpose(
        &mut self,
        channel_id: &str,
        purpose: &str,
    ) -> Result<Channel, UpdateError> {
        if purpose.chars().count() > MAX_PURPOSE_CHARS {
            return Err(UpdateError::TooLong);
        }
        let channel = self
            .channels
            .iter_mut()
            .find(|c| c.id == channel_id)
            .ok_or(UpdateError::UnknownChannel)?;
        channel.purpose = purpose.to_string();
        Ok(channel.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_workspace() -> Workspace {
        Workspace::parse(
            r#"{"channels": [{"id": "c1", "name": "dev", "purpose": "old"}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_update_purpose() {
        let mut ws = test_workspace();
        let updated = ws.update_purpose("c1", "Build and ship").unwrap();
        assert_eq!(updated.purpose, "Build and ship");
        assert_eq!(ws.channel_by_id("c1").unwrap().purpose, "Build and ship");
    }

    #[test]
    fn test_update_purpose_too_long() {
        let mut ws = test_workspace();
        let long = "x".repeat(MAX_PURPOSE_CHARS + 1);
        assert_eq!(ws.update_purpose("c1", &long), Err(UpdateError::TooLong));
        // Rejected update leaves the stored purpose untouched
        assert_eq!(ws.channel_by_id("c1").unwrap().purpose, "old");
    }

    #[test]
    fn test_update_purpose_at_exact_bound() {
        let mut ws = test_workspace();
        let exact = "y".repeat(MAX_PURPOSE_CHARS);
        assert!(ws.update_purpose("c1", &exact).is_ok());
    }

    #[test]
    fn test_update_purpose_unknown_channel() {
        let mut ws = test_workspace();
        assert_eq!(
            ws.update_purpose("missing", "text"),
            Err(UpdateError::UnknownChannel)
        );
    }
}
