//! In-memory entity directories.
//!
//! Synchronous name lookups over the loaded workspace snapshot. The switcher
//! resolves submitted text against these; misses are not errors, they fall
//! through to the not-found resolution.

use std::collections::HashMap;

use crate::workspace::{Channel, User, Workspace};

/// Channels keyed by their unique name.
#[derive(Debug, Default)]
pub struct ChannelDirectory {
    by_name: HashMap<String, Channel>,
}

impl ChannelDirectory {
    pub fn from_workspace(workspace: &Workspace) -> Self {
        let by_name = workspace
            .channels
            .iter()
            .map(|c| (c.name.clone(), c.clone()))
            .collect();
        Self { by_name }
    }

    pub fn by_name(&self, name: &str) -> Option<&Channel> {
        self.by_name.get(name)
    }

    /// Replace the stored copy of a channel after it was edited.
    pub fn update(&mut self, channel: &Channel) {
        self.by_name.insert(channel.name.clone(), channel.clone());
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Users keyed by their unique username.
#[derive(Debug, Default)]
pub struct UserDirectory {
    by_username: HashMap<String, User>,
}

impl UserDirectory {
    pub fn from_workspace(workspace: &Workspace) -> Self {
        let by_username = workspace
            .users
            .iter()
            .map(|u| (u.username.clone(), u.clone()))
            .collect();
        Self { by_username }
    }

    pub fn by_username(&self, username: &str) -> Option<&User> {
        self.by_username.get(username)
    }

    pub fn len(&self) -> usize {
        self.by_username.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_username.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_workspace() -> Workspace {
        Workspace::parse(
            r#"{
                "channels": [
                    {"id": "c1", "name": "town-square", "display_name": "Town Square"},
                    {"id": "c2", "name": "dev", "display_name": "Development"}
                ],
                "users": [
                    {"id": "u1", "username": "alice"},
                    {"id": "u2", "username": "bob"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_channel_lookup_hit() {
        let dir = ChannelDirectory::from_workspace(&test_workspace());
        assert_eq!(dir.by_name("town-square").unwrap().id, "c1");
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn test_channel_lookup_miss() {
        let dir = ChannelDirectory::from_workspace(&test_workspace());
        assert!(dir.by_name("zzzz-nope").is_none());
    }

    #[test]
    fn test_channel_lookup_is_exact() {
        // Lookup is by name, not display name, and case-sensitive
        let dir = ChannelDirectory::from_workspace(&test_workspace());
        assert!(dir.by_name("Town Square").is_none());
        assert!(dir.by_name("TOWN-SQUARE").is_none());
    }

    #[test]
    fn test_channel_update_replaces_copy() {
        let mut dir = ChannelDirectory::from_workspace(&test_workspace());
        let mut edited = dir.by_name("dev").unwrap().clone();
        edited.purpose = "Build things".to_string();
        dir.update(&edited);
        assert_eq!(dir.by_name("dev").unwrap().purpose, "Build things");
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn test_user_lookup() {
        let dir = UserDirectory::from_workspace(&test_workspace());
        assert_eq!(dir.by_username("alice").unwrap().id, "u1");
        assert!(dir.by_username("carol").is_none());
    }

    #[test]
    fn test_empty_workspace() {
        let ws = Workspace::default();
        assert!(ChannelDirectory::from_workspace(&ws).is_empty());
        assert!(UserDirectory::from_workspace(&ws).is_empty());
    }
}
