//! Outbound signaling events

use serde::{Deserialize, Serialize};

use sigrelay_auth_core::UserId;
use sigrelay_registrar_core::ConnectionId;

/// Events the session layer emits over the transport.
///
/// Serializes with the wire event names clients bind handlers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload")]
pub enum SignalEvent {
    /// Presence snapshot, broadcast to every admitted connection after each
    /// admission or teardown.
    #[serde(rename = "getOnlineUsers")]
    OnlineUsers { users: Vec<UserId> },

    /// Private acknowledgment to a newly admitted connection.
    #[serde(rename = "auth:success")]
    AuthSuccess {
        user_id: UserId,
        connection_id: ConnectionId,
    },

    /// Targeted notice to the peer of a disconnected call party.
    #[serde(rename = "call:ended")]
    CallEnded,
}

impl SignalEvent {
    /// Wire event name.
    pub fn name(&self) -> &'static str {
        match self {
            SignalEvent::OnlineUsers { .. } => "getOnlineUsers",
            SignalEvent::AuthSuccess { .. } => "auth:success",
            SignalEvent::CallEnded => "call:ended",
        }
    }
}
