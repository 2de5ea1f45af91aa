//! Presence tracking for the two users: who is connected and when each was
//! last heard from.

mod connect_endpoint;
mod heartbeat_endpoint;
mod tracker;

pub use connect_endpoint::connect_endpoint;
pub use heartbeat_endpoint::heartbeat_endpoint;
pub use tracker::{PresenceEntry, PresenceTracker};
