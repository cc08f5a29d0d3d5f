use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use tui_textarea::TextArea;

use crate::workspace::{User, Workspace};

/// Members shown per page
pub const USERS_PER_PAGE: usize = 50;

/// A team member joined with their user profile.
#[derive(Debug, Clone)]
pub struct MemberRow {
    pub user: User,
    pub is_admin: bool,
}

/// Build the display rows: users that actually belong to the team, in
/// username order.
pub fn build_member_rows(workspace: &Workspace) -> Vec<MemberRow> {
    let mut rows: Vec<MemberRow> = workspace
        .members
        .iter()
        .filter_map(|member| {
            workspace.user_by_id(&member.user_id).map(|user| MemberRow {
                user: user.clone(),
                is_admin: member.is_admin(),
            })
        })
        .collect();
    rows.sort_by(|a, b| a.user.username.cmp(&b.user.username));
    rows
}

/// Transient state of the member list surface.
pub struct MembersState {
    pub open: bool,
    pub search: TextArea<'static>,
    /// Index into the filtered list (absolute, not per page)
    pub selected: usize,
    matcher: SkimMatcherV2,
    pending: Option<u64>,
}

impl fmt::Debug for MembersState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MembersState")
            .field("open", &self.open)
            .field("selected", &self.selected)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl MembersState {
    pub fn new() -> Self {
        Self {
            open: false,
            search: TextArea::default(),
            selected: 0,
            matcher: SkimMatcherV2::default(),
            pending: None,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        self.reset();
    }

    pub fn close(&mut self) {
        self.open = false;
        self.reset();
    }

    fn reset(&mut self) {
        self.search = TextArea::default();
        self.selected = 0;
        self.pending = None;
    }

    pub fn search_query(&self) -> &str {
        self.search.lines()[0].as_ref()
    }

    /// Filter rows against the search box, ranked by match score.
    /// An empty search returns everything in username order.
    pub fn filter<'a>(&self, rows: &'a [MemberRow]) -> Vec<&'a MemberRow> {
        let query = self.search_query().trim();
        if query.is_empty() {
            return rows.iter().collect();
        }

        let mut scored: Vec<(i64, &MemberRow)> = rows
            .iter()
            .filter_map(|row| {
                let haystack = format!(
                    "{} {} {}",
                    row.user.username,
                    row.user.nickname,
                    row.user.full_name()
                );
                self.matcher
                    .fuzzy_match(&haystack, query)
                    .map(|score| (score, row))
            })
            .collect();

        scored.sort_by(|(sa, ra), (sb, rb)| {
            sb.cmp(sa)
                .then_with(|| ra.user.username.cmp(&rb.user.username))
        });

        scored.into_iter().map(|(_, row)| row).collect()
    }

    /// Clamp the selection when the filtered list shrinks
    pub fn clamp_selection(&mut self, count: usize) {
        if count == 0 {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(count - 1);
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, count: usize) {
        if self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(USERS_PER_PAGE);
    }

    pub fn page_down(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.selected = (self.selected + USERS_PER_PAGE).min(count - 1);
    }

    /// Zero-based page of the current selection
    pub fn page(&self) -> usize {
        self.selected / USERS_PER_PAGE
    }

    pub fn begin_pending(&mut self, generation: u64) {
        self.pending = Some(generation);
    }

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

impl Default for MembersState {
    fn default() -> Self {
        Self::new()
    }
}
