use std::sync::mpsc::{Receiver, Sender, channel};

use tui_textarea::TextArea;

use crate::config::Config;
use crate::directory::{ChannelDirectory, UserDirectory};
use crate::dm::{self, DmRequest, DmResponse};
use crate::error::ChanhopError;
use crate::help::HelpPopupState;
use crate::license;
use crate::members::{self, MemberRow, MembersState};
use crate::messages;
use crate::notification::NotificationState;
use crate::purpose::PurposeState;
use crate::suggest::{FuzzySuggestionProvider, SuggestionProvider};
use crate::switcher::SwitcherState;
use crate::switcher::resolve;
use crate::workspace::{Channel, Workspace, WorkspaceLoader};

#[cfg(debug_assertions)]
use log::debug;

/// Which overlay surface is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Switcher,
    Members,
    Purpose,
}

/// What to output when exiting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the current channel's id
    Id,
    /// Print the current channel as JSON
    Json,
}

/// Application state
pub struct App {
    pub loader: Option<WorkspaceLoader>,
    pub workspace: Option<Workspace>,
    pub channels: ChannelDirectory,
    pub users: UserDirectory,
    pub provider: Option<FuzzySuggestionProvider>,
    pub member_rows: Vec<MemberRow>,

    pub overlay: Overlay,
    pub switcher: SwitcherState,
    pub members: MembersState,
    pub purpose: PurposeState,
    pub help: HelpPopupState,
    pub notification: NotificationState,
    /// The primary input surface focus returns to when overlays close
    pub message_input: TextArea<'static>,

    pub current_channel: Option<Channel>,
    pub output_mode: Option<OutputMode>,
    pub should_quit: bool,
    pub fatal: Option<ChanhopError>,
    pub config: Config,

    dirty: bool,
    /// Lifecycle token for async DM opens; bumped on every surface
    /// transition so stale completions are dropped
    dm_generation: u64,
    dm_tx: Option<Sender<DmRequest>>,
    dm_rx: Option<Receiver<DmResponse>>,
}

impl App {
    fn new_empty(config: &Config) -> Self {
        Self {
            loader: None,
            workspace: None,
            channels: ChannelDirectory::default(),
            users: UserDirectory::default(),
            provider: None,
            member_rows: Vec::new(),
            overlay: Overlay::None,
            switcher: SwitcherState::new(),
            members: MembersState::new(),
            purpose: PurposeState::new(),
            help: HelpPopupState::new(),
            notification: NotificationState::new(),
            message_input: TextArea::default(),
            current_channel: None,
            output_mode: None,
            should_quit: false,
            fatal: None,
            config: config.clone(),
            dirty: true,
            dm_generation: 0,
            dm_tx: None,
            dm_rx: None,
        }
    }

    /// Create an App that installs its workspace once the loader finishes
    pub fn new_with_loader(loader: WorkspaceLoader, config: &Config) -> Self {
        let mut app = Self::new_empty(config);
        app.loader = Some(loader);
        app
    }

    /// Create an App over an already-loaded workspace
    pub fn with_workspace(workspace: Workspace, config: &Config) -> Self {
        let mut app = Self::new_empty(config);
        app.install_workspace(workspace);
        app
    }

    /// Wire up directories, provider, member rows, and the DM worker from a
    /// loaded snapshot, then open the switcher.
    pub fn install_workspace(&mut self, workspace: Workspace) {
        self.channels = ChannelDirectory::from_workspace(&workspace);
        self.users = UserDirectory::from_workspace(&workspace);
        self.provider = Some(FuzzySuggestionProvider::from_workspace(
            &workspace,
            self.config.switcher.max_suggestions,
        ));
        self.member_rows = members::build_member_rows(&workspace);

        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();
        dm::spawn_worker(&workspace, request_rx, response_tx);
        self.dm_tx = Some(request_tx);
        self.dm_rx = Some(response_rx);

        self.check_license(&workspace);
        self.workspace = Some(workspace);

        self.open_switcher();
        self.mark_dirty();
    }

    fn check_license(&mut self, workspace: &Workspace) {
        let Some(license) = &workspace.license else {
            return;
        };
        let now = license::now_millis();
        if license::is_expired(license, now) {
            self.notification.show_warning(&format!(
                "{} {}",
                messages::localize("license.expired", "The workspace license expired on"),
                license::display_expiry_date(license)
            ));
        } else if license::is_expiring(license, now) {
            self.notification.show_warning(&format!(
                "{} {}",
                messages::localize("license.expiring", "The workspace license expires on"),
                license::display_expiry_date(license)
            ));
        }
    }

    /// Poll the background loader; install the workspace or record a fatal
    /// error once it completes.
    pub fn poll_workspace_loader(&mut self) {
        let Some(loader) = &mut self.loader else {
            return;
        };
        match loader.poll() {
            Some(Ok(workspace)) => {
                self.loader = None;
                self.install_workspace(workspace);
            }
            Some(Err(e)) => {
                self.loader = None;
                self.fatal = Some(e);
                self.should_quit = true;
            }
            None => {}
        }
    }

    /// Drain completed DM opens from the worker.
    pub fn poll_dm_responses(&mut self) {
        loop {
            let response = {
                let Some(rx) = &self.dm_rx else { break };
                match rx.try_recv() {
                    Ok(response) => response,
                    Err(_) => break,
                }
            };
            self.handle_dm_response(response);
        }
    }

    fn handle_dm_response(&mut self, response: DmResponse) {
        if response.generation != self.dm_generation {
            // The surface that asked is gone; a late completion is a no-op
            #[cfg(debug_assertions)]
            debug!(
                "dropping stale dm response (generation {} != {})",
                response.generation, self.dm_generation
            );
            return;
        }

        if self.switcher.take_pending(response.generation) {
            match response.channel {
                Some(channel) => self.navigate_to(channel),
                // Failed open still resolves: surface the not-found error
                // instead of leaving the switcher stuck pending
                None => {
                    if !self.switcher.query().trim().is_empty() {
                        self.switcher.set_error(resolve::not_found_message());
                    }
                }
            }
            self.mark_dirty();
        } else if self.members.take_pending(response.generation) {
            match response.channel {
                Some(channel) => self.navigate_to(channel),
                None => self.notification.show_warning(&messages::localize(
                    "members.dm_failed",
                    "Could not open a direct message",
                )),
            }
            self.mark_dirty();
        }
    }

    /// Ask the worker to open a DM. Returns the generation the request was
    /// tagged with, or None when no worker is available.
    pub fn request_dm_open(&mut self, user_id: &str) -> Option<u64> {
        let tx = self.dm_tx.as_ref()?;
        tx.send(DmRequest::Open {
            user_id: user_id.to_string(),
            generation: self.dm_generation,
        })
        .ok()?;
        Some(self.dm_generation)
    }

    /// Regenerate suggestions for the current query
    pub fn update_switcher_suggestions(&mut self) {
        if self.switcher.query().trim().is_empty() {
            self.switcher.suggest.hide();
            return;
        }
        if let Some(provider) = &self.provider {
            let suggestions = provider.provide(self.switcher.query());
            self.switcher.suggest.update_suggestions(suggestions);
        }
    }

    /// Switch to a channel: record it as current, close the active surface,
    /// and (by default) quit so the target is printed for the caller.
    pub fn navigate_to(&mut self, channel: Channel) {
        #[cfg(debug_assertions)]
        debug!("navigate to {} ({})", channel.name, channel.id);

        self.current_channel = Some(channel);
        self.output_mode = Some(OutputMode::Id);
        self.close_overlay();
        if self.config.switcher.exit_on_switch {
            self.should_quit = true;
        }
        self.mark_dirty();
    }

    pub fn open_switcher(&mut self) {
        self.close_overlay();
        self.overlay = Overlay::Switcher;
        self.switcher.open();
    }

    pub fn toggle_switcher(&mut self) {
        if self.overlay == Overlay::Switcher {
            self.close_overlay();
        } else {
            self.open_switcher();
        }
    }

    pub fn open_members(&mut self) {
        self.close_overlay();
        self.overlay = Overlay::Members;
        self.members.open();
    }

    pub fn open_purpose_for_current(&mut self) {
        let Some(channel) = self.current_channel.clone() else {
            self.notification.show(&messages::localize(
                "purpose.no_channel",
                "Switch to a channel first",
            ));
            return;
        };
        self.close_overlay();
        self.overlay = Overlay::Purpose;
        self.purpose.open_for(&channel);
    }

    /// Close whichever overlay is active, resetting its transient state.
    /// Focus falls back to the primary message input by construction; the
    /// generation bump turns any in-flight DM open into a no-op.
    pub fn close_overlay(&mut self) {
        match self.overlay {
            Overlay::Switcher => self.switcher.close(),
            Overlay::Members => self.members.close(),
            Overlay::Purpose => self.purpose.close(),
            Overlay::None => {}
        }
        self.overlay = Overlay::None;
        self.dm_generation = self.dm_generation.wrapping_add(1);
    }

    /// Quit printing the current channel as JSON
    pub fn quit_with_json(&mut self) {
        if self.current_channel.is_some() {
            self.output_mode = Some(OutputMode::Json);
            self.should_quit = true;
        } else {
            self.notification.show(&messages::localize(
                "home.no_channel",
                "No channel selected yet",
            ));
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    #[cfg(test)]
    pub fn dm_generation(&self) -> u64 {
        self.dm_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let workspace = Workspace::parse(
            r#"{
                "channels": [{"id": "c1", "name": "town-square", "display_name": "Town Square"}],
                "users": [{"id": "u1", "username": "alice"}]
            }"#,
        )
        .unwrap();
        App::with_workspace(workspace, &Config::default())
    }

    #[test]
    fn test_install_opens_switcher() {
        let app = test_app();
        assert_eq!(app.overlay, Overlay::Switcher);
        assert!(app.switcher.open);
        assert_eq!(app.switcher.query(), "");
        assert!(!app.should_quit());
        assert_eq!(app.output_mode(), None);
    }

    #[test]
    fn test_install_builds_directories() {
        let app = test_app();
        assert_eq!(app.channels.len(), 1);
        assert_eq!(app.users.len(), 1);
        assert!(app.provider.is_some());
    }

    #[test]
    fn test_navigate_closes_and_quits_by_default() {
        let mut app = test_app();
        let channel = app.channels.by_name("town-square").unwrap().clone();
        app.navigate_to(channel);
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.should_quit());
        assert_eq!(app.output_mode(), Some(OutputMode::Id));
        assert_eq!(app.current_channel.as_ref().unwrap().id, "c1");
    }

    #[test]
    fn test_navigate_stays_running_when_configured() {
        let mut config = Config::default();
        config.switcher.exit_on_switch = false;
        let workspace = Workspace::parse(
            r#"{"channels": [{"id": "c1", "name": "town-square"}]}"#,
        )
        .unwrap();
        let mut app = App::with_workspace(workspace, &config);
        let channel = app.channels.by_name("town-square").unwrap().clone();
        app.navigate_to(channel);
        assert!(!app.should_quit());
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn test_close_overlay_bumps_generation() {
        let mut app = test_app();
        let before = app.dm_generation();
        app.close_overlay();
        assert_eq!(app.dm_generation(), before + 1);
    }

    #[test]
    fn test_toggle_switcher() {
        let mut app = test_app();
        assert_eq!(app.overlay, Overlay::Switcher);
        app.toggle_switcher();
        assert_eq!(app.overlay, Overlay::None);
        app.toggle_switcher();
        assert_eq!(app.overlay, Overlay::Switcher);
    }

    #[test]
    fn test_update_suggestions_empty_query_hides() {
        let mut app = test_app();
        app.switcher.textarea.insert_str("tow");
        app.update_switcher_suggestions();
        assert!(app.switcher.suggest.is_visible());

        app.switcher.textarea.delete_line_by_head();
        app.update_switcher_suggestions();
        assert!(!app.switcher.suggest.is_visible());
    }

    #[test]
    fn test_quit_with_json_requires_channel() {
        let mut app = test_app();
        app.quit_with_json();
        assert!(!app.should_quit());
        assert!(app.notification.current().is_some());

        let channel = app.channels.by_name("town-square").unwrap().clone();
        app.navigate_to(channel);
        app.should_quit = false;
        app.quit_with_json();
        assert!(app.should_quit());
        assert_eq!(app.output_mode(), Some(OutputMode::Json));
    }

    #[test]
    fn test_open_purpose_without_channel_shows_notice() {
        let mut app = test_app();
        app.open_purpose_for_current();
        assert_ne!(app.overlay, Overlay::Purpose);
        assert!(app.notification.current().is_some());
    }

    #[test]
    fn test_dirty_flag_cycle() {
        let mut app = test_app();
        assert!(app.should_render());
        app.clear_dirty();
        assert!(!app.should_render());
        app.mark_dirty();
        assert!(app.should_render());
    }
}
