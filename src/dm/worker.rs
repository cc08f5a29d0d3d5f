//! Direct-message worker thread.
//!
//! Receives open requests via channel and answers with the direct channel
//! for the requested user. Existing direct channels from the snapshot are
//! reused; otherwise one is synthesized with the canonical pair name. The
//! blocking `recv()` loop is fine in a dedicated thread; the worker exits
//! when the request channel closes.

use std::collections::HashMap;
use std::sync::mpsc::{Receiver, Sender};

use super::{DmRequest, DmResponse};
use crate::workspace::{Channel, ChannelType, Workspace};

/// Everything the worker needs, snapshotted at spawn time.
struct DmIndex {
    self_id: Option<String>,
    usernames_by_id: HashMap<String, String>,
    direct_by_name: HashMap<String, Channel>,
}

impl DmIndex {
    fn from_workspace(workspace: &Workspace) -> Self {
        let usernames_by_id = workspace
            .users
            .iter()
            .map(|u| (u.id.clone(), u.username.clone()))
            .collect();

        let direct_by_name = workspace
            .channels
            .iter()
            .filter(|c| c.channel_type == ChannelType::Direct)
            .map(|c| (c.name.clone(), c.clone()))
            .collect();

        Self {
            self_id: workspace.self_id.clone(),
            usernames_by_id,
            direct_by_name,
        }
    }
}

/// Spawn the DM worker thread
pub fn spawn_worker(
    workspace: &Workspace,
    request_rx: Receiver<DmRequest>,
    response_tx: Sender<DmResponse>,
) {
    let index = DmIndex::from_workspace(workspace);

    std::thread::spawn(move || {
        while let Ok(request) = request_rx.recv() {
            match request {
                DmRequest::Open {
                    user_id,
                    generation,
                } => {
                    let channel = open_direct_channel(&index, &user_id);

                    #[cfg(debug_assertions)]
                    log::debug!(
                        "dm worker: open user_id={} generation={} -> {:?}",
                        user_id,
                        generation,
                        channel.as_ref().map(|c| c.name.as_str())
                    );

                    let _ = response_tx.send(DmResponse {
                        generation,
                        channel,
                    });
                }
            }
        }
    });
}

fn open_direct_channel(index: &DmIndex, user_id: &str) -> Option<Channel> {
    let username = index.usernames_by_id.get(user_id)?;
    let name = direct_channel_name(index.self_id.as_deref(), user_id);

    if let Some(existing) = index.direct_by_name.get(&name) {
        return Some(existing.clone());
    }

    Some(Channel {
        id: name.clone(),
        name,
        display_name: username.clone(),
        channel_type: ChannelType::Direct,
        purpose: String::new(),
        header: String::new(),
    })
}

/// Canonical direct channel name: the two participant ids sorted and joined.
pub fn direct_channel_name(self_id: Option<&str>, user_id: &str) -> String {
    match self_id {
        Some(me) => {
            let (a, b) = if me <= user_id {
                (me, user_id)
            } else {
                (user_id, me)
            };
            format!("{}__{}", a, b)
        }
        None => format!("{}__dm", user_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;
    use std::time::Duration;

    fn test_workspace() -> Workspace {
        Workspace::parse(
            r#"{
                "self_id": "me1",
                "channels": [
                    {"id": "d1", "name": "me1__u2", "display_name": "bob", "type": "D"}
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
    fn test_direct_channel_name_sorts_ids() {
        assert_eq!(direct_channel_name(Some("me1"), "u1"), "me1__u1");
        assert_eq!(direct_channel_name(Some("zz"), "aa"), "aa__zz");
    }

    #[test]
    fn test_direct_channel_name_without_self() {
        assert_eq!(direct_channel_name(None, "u1"), "u1__dm");
    }

    #[test]
    fn test_open_synthesizes_channel() {
        let index = DmIndex::from_workspace(&test_workspace());
        let channel = open_direct_channel(&index, "u1").unwrap();
        assert_eq!(channel.name, "me1__u1");
        assert_eq!(channel.display_name, "alice");
        assert_eq!(channel.channel_type, ChannelType::Direct);
    }

    #[test]
    fn test_open_reuses_existing_channel() {
        let index = DmIndex::from_workspace(&test_workspace());
        let channel = open_direct_channel(&index, "u2").unwrap();
        // The snapshot already has me1__u2; its id is preserved
        assert_eq!(channel.id, "d1");
    }

    #[test]
    fn test_open_unknown_user_fails() {
        let index = DmIndex::from_workspace(&test_workspace());
        assert!(open_direct_channel(&index, "nobody").is_none());
    }

    #[test]
    fn test_worker_round_trip() {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();
        spawn_worker(&test_workspace(), request_rx, response_tx);

        request_tx
            .send(DmRequest::Open {
                user_id: "u1".to_string(),
                generation: 7,
            })
            .unwrap();

        let response = response_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("worker should respond");
        assert_eq!(response.generation, 7);
        assert_eq!(response.channel.unwrap().name, "me1__u1");
    }

    #[test]
    fn test_worker_reports_failure_with_generation() {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();
        spawn_worker(&test_workspace(), request_rx, response_tx);

        request_tx
            .send(DmRequest::Open {
                user_id: "nobody".to_string(),
                generation: 3,
            })
            .unwrap();

        let response = response_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("worker should respond");
        assert_eq!(response.generation, 3);
        assert!(response.channel.is_none());
    }
}
