//! Workspace license status helpers.
//!
//! Pure functions over the optional license record in the workspace
//! snapshot. All take an explicit `now` in epoch milliseconds so expiry
//! logic is testable without touching the wall clock.

use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;

/// How long before expiry a warning is raised (15 days, in milliseconds).
pub const EXPIRY_NOTIFICATION_MILLIS: i64 = 1000 * 60 * 60 * 24 * 15;

/// Grace period after expiry before the license counts as lapsed (5 days).
pub const GRACE_PERIOD_MILLIS: i64 = 1000 * 60 * 60 * 24 * 5;

/// License record from the workspace snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct License {
    #[serde(default)]
    pub is_licensed: bool,
    /// Expiry timestamp in epoch milliseconds. Ignored when unlicensed.
    #[serde(default)]
    pub expires_at: i64,
}

/// True when a licensed workspace is inside the expiry notification window.
pub fn is_expiring(license: &License, now_millis: i64) -> bool {
    if !license.is_licensed {
        return false;
    }
    license.expires_at - now_millis <= EXPIRY_NOTIFICATION_MILLIS
}

/// True when a licensed workspace is past its expiry timestamp.
pub fn is_expired(license: &License, now_millis: i64) -> bool {
    if !license.is_licensed {
        return false;
    }
    license.expires_at - now_millis < 0
}

/// True when a licensed workspace is past expiry plus the grace period.
pub fn is_past_grace_period(license: &License, now_millis: i64) -> bool {
    if !license.is_licensed {
        return false;
    }
    now_millis - license.expires_at > GRACE_PERIOD_MILLIS
}

/// Human-readable expiry date, e.g. "March 5, 2027" (UTC).
pub fn display_expiry_date(license: &License) -> String {
    match Utc.timestamp_millis_opt(license.expires_at).single() {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => String::new(),
    }
}

/// Current time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
