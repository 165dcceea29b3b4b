//! Transport seam

use async_trait::async_trait;

use crate::events::SignalEvent;
use sigrelay_registrar_core::ConnectionId;

/// Outbound side of the transport collaborator.
///
/// Delivery is fire-and-forget: implementations drop events addressed to
/// connections that are already gone, and the session layer never awaits an
/// acknowledgment or retries.
#[async_trait]
pub trait SignalSink: Send + Sync {
    /// Unicast `event` to one connection.
    async fn send(&self, conn: &ConnectionId, event: SignalEvent);

    /// Send `event` to all currently admitted connections.
    async fn broadcast(&self, event: SignalEvent);
}
