//! Ranked suggestion lookup over the workspace.
//!
//! The provider is consulted on every query change and returns typed,
//! ranked matches. Ranking is skim-style fuzzy matching over channel names
//! and user names; channels win score ties against direct-message targets.

use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::state::{Suggestion, SuggestionKind};
use crate::messages;
use crate::workspace::{ChannelType, Workspace};

/// The display-text marker appended to direct-message suggestions.
///
/// By convention the marker never appears in a channel name; the switcher's
/// free-text fallback parser relies on that.
pub fn dm_marker() -> String {
    messages::localize("switcher.dm", "(Direct Message)")
}

/// Supplies ranked suggestions for a query. May return an empty set.
pub trait SuggestionProvider {
    fn provide(&self, query: &str) -> Vec<Suggestion>;
}

struct Candidate {
    /// Query text the suggestion completes to
    text: String,
    /// Text the fuzzy matcher runs against (includes display names)
    haystack: String,
    kind: SuggestionKind,
    description: String,
}

/// Fuzzy-matching provider over a workspace snapshot.
pub struct FuzzySuggestionProvider {
    matcher: SkimMatcherV2,
    candidates: Vec<Candidate>,
    max_results: usize,
}

impl fmt::Debug for FuzzySuggestionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzySuggestionProvider")
            .field("candidates", &self.candidates.len())
            .field("max_results", &self.max_results)
            .finish_non_exhaustive()
    }
}

impl FuzzySuggestionProvider {
    pub fn from_workspace(workspace: &Workspace, max_results: usize) -> Self {
        let marker = dm_marker();
        let mut candidates = Vec::new();

        for channel in &workspace.channels {
            // Direct/group channels are reached through their user, not by name
            if matches!(
                channel.channel_type,
                ChannelType::Direct | ChannelType::Group
            ) {
                continue;
            }
            candidates.push(Candidate {
                text: channel.name.clone(),
                haystack: format!("{} {}", channel.name, channel.display_name),
                kind: SuggestionKind::Channel {
                    id: channel.id.clone(),
                },
                description: channel.display_name.clone(),
            });
        }

        for user in &workspace.users {
            candidates.push(Candidate {
                text: format!("{} {}", user.username, marker),
                haystack: format!("{} {} {}", user.username, user.nickname, user.full_name()),
                kind: SuggestionKind::DirectMessage {
                    user_id: user.id.clone(),
                },
                description: user.full_name(),
            });
        }

        Self {
            matcher: SkimMatcherV2::default(),
            candidates,
            max_results,
        }
    }
}

impl SuggestionProvider for FuzzySuggestionProvider {
    fn provide(&self, query: &str) -> Vec<Suggestion> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(i64, &Candidate)> = self
            .candidates
            .iter()
            .filter_map(|c| {
                self.matcher
                    .fuzzy_match(&c.haystack, query)
                    .map(|score| (score, c))
            })
            .collect();

        // Highest score first; channels beat DM targets on ties, then
        // alphabetical for a stable order
        scored.sort_by(|(sa, ca), (sb, cb)| {
            sb.cmp(sa)
                .then_with(|| kind_rank(&ca.kind).cmp(&kind_rank(&cb.kind)))
                .then_with(|| ca.text.cmp(&cb.text))
        });

        scored
            .into_iter()
            .take(self.max_results)
            .map(|(_, c)| {
                Suggestion::new(c.text.clone(), c.kind.clone())
                    .with_description(c.description.clone())
            })
            .collect()
    }
}

fn kind_rank(kind: &SuggestionKind) -> u8 {
    match kind {
        SuggestionKind::Channel { .. } => 0,
        SuggestionKind::DirectMessage { .. } => 1,
    }
}
