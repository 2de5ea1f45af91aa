//! Per-user connected/last-seen bookkeeping.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::user::User;

/// The connection state of a single user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceEntry {
    /// Whether the user's client has announced itself via connect.
    pub connected: bool,
    /// When the user's client was last heard from, either by connecting or
    /// by a heartbeat. `null` until first contact.
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_seen: Option<OffsetDateTime>,
}

/// Presence state for the fixed set of two users.
///
/// The two entries exist for the lifetime of the process; connect,
/// heartbeat and reset only flip their fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresenceTracker {
    /// Matt's presence entry.
    pub matt: PresenceEntry,
    /// Eileen's presence entry.
    pub eileen: PresenceEntry,
}

impl PresenceTracker {
    /// The presence entry for `user`.
    pub fn entry(&self, user: User) -> &PresenceEntry {
        match user {
            User::Matt => &self.matt,
            User::Eileen => &self.eileen,
        }
    }

    fn entry_mut(&mut self, user: User) -> &mut PresenceEntry {
        match user {
            User::Matt => &mut self.matt,
            User::Eileen => &mut self.eileen,
        }
    }

    /// Mark `user` as connected and stamp their last-seen time.
    pub fn connect(&mut self, user: User) {
        let entry = self.entry_mut(user);
        entry.connected = true;
        entry.last_seen = Some(OffsetDateTime::now_utc());
    }

    /// Stamp the last-seen time for `user` without touching the connected
    /// flag.
    pub fn heartbeat(&mut self, user: User) {
        self.entry_mut(user).last_seen = Some(OffsetDateTime::now_utc());
    }

    /// Restore both entries to their initial state
    /// (`connected: false, last_seen: None`).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
