//! Workspace snapshot model.
//!
//! A snapshot is a single JSON document describing the chat workspace the
//! switcher operates on: channels, users, team membership, and an optional
//! license record. Unknown fields are ignored so snapshots exported from
//! richer servers parse cleanly.

pub mod loader;

pub use loader::{LoadingState, WorkspaceLoader};

use serde::{Deserialize, Serialize};

use crate::error::ChanhopError;
use crate::license::License;

/// Channel visibility/type marker, serialized as the single-letter code
/// used by chat server exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelType {
    #[default]
    #[serde(rename = "O")]
    Open,
    #[serde(rename = "P")]
    Private,
    #[serde(rename = "D")]
    Direct,
    #[serde(rename = "G")]
    Group,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(rename = "type", default)]
    pub channel_type: ChannelType,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub header: String,
}

impl Channel {
    /// Label shown in lists: display name when present, else the name.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// "First Last", with either part optional.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamMember {
    pub user_id: String,
    #[serde(default)]
    pub roles: String,
}

impl TeamMember {
    pub fn is_admin(&self) -> bool {
        self.roles.split_whitespace().any(|r| r == "team_admin")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    pub license: Option<License>,
    /// The viewing user's id; used to derive direct-message channel names.
    #[serde(default)]
    pub self_id: Option<String>,
}

impl Workspace {
    /// Parse a snapshot from its JSON text.
    pub fn parse(json: &str) -> Result<Self, ChanhopError> {
        serde_json::from_str(json).map_err(|e| ChanhopError::InvalidWorkspace(e.to_string()))
    }

    pub fn channel_by_id(&self, id: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }

    pub fn user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}
