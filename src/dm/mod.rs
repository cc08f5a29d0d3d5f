//! Direct-message channel opening.
//!
//! Opening a DM is the one asynchronous operation in the switcher: requests
//! go to a background worker over a channel and responses are polled from
//! the event loop. Every request carries the app's current generation token;
//! responses with a stale generation are dropped by the caller, so a late
//! completion after the surface closed is a no-op by construction.

pub mod worker;

pub use worker::spawn_worker;

use crate::workspace::Channel;

/// Request to the DM worker
pub enum DmRequest {
    Open { user_id: String, generation: u64 },
}

/// Response from the DM worker
///
/// `channel` is None when the open failed (unknown user). Failure is not an
/// error: the caller funnels it into the ordinary not-found resolution.
pub struct DmResponse {
    pub generation: u64,
    pub channel: Option<Channel>,
}
