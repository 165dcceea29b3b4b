//! Session lifecycle coordination
//!
//! The coordinator owns the Authenticated → Admitted and Admitted →
//! Disconnected transitions. It is the one context object constructed at
//! startup and handed to every collaborator that needs registry access;
//! cloning shares the underlying state.

use std::sync::Arc;

use crate::events::SignalEvent;
use crate::transport::SignalSink;
use sigrelay_auth_core::UserId;
use sigrelay_registrar_core::{CallPairingTracker, ConnectionId, PresenceRegistry};

/// Orchestrates admission and teardown for every connection.
pub struct SessionCoordinator {
    registry: Arc<PresenceRegistry>,
    calls: Arc<CallPairingTracker>,
    sink: Arc<dyn SignalSink>,
}

impl SessionCoordinator {
    pub fn new(sink: Arc<dyn SignalSink>) -> Self {
        Self {
            registry: Arc::new(PresenceRegistry::new()),
            calls: Arc::new(CallPairingTracker::new()),
            sink,
        }
    }

    /// Build a coordinator around existing shared state.
    pub fn with_parts(
        registry: Arc<PresenceRegistry>,
        calls: Arc<CallPairingTracker>,
        sink: Arc<dyn SignalSink>,
    ) -> Self {
        Self {
            registry,
            calls,
            sink,
        }
    }

    /// Authenticated → Admitted.
    ///
    /// Registers the connection (overwriting any binding a previous
    /// connection of the same identity held), broadcasts the updated online
    /// set to every admitted connection including the new one, then sends the
    /// private acknowledgment to the new connection.
    pub async fn admit(&self, user: UserId, conn: ConnectionId) {
        tracing::info!("User {} connected on {}", user, conn);
        self.registry.register(user.clone(), conn.clone());

        self.broadcast_online_users().await;

        self.sink
            .send(
                &conn,
                SignalEvent::AuthSuccess {
                    user_id: user,
                    connection_id: conn.clone(),
                },
            )
            .await;
    }

    /// Admitted → Disconnected.
    ///
    /// Cleanup is scoped to the exact disconnecting handle: if `user` has
    /// since reconnected on a different handle, the whole teardown is a
    /// silent no-op so the successor session is left untouched.
    pub async fn disconnect(&self, user: &UserId, conn: &ConnectionId) {
        match self.registry.lookup(user) {
            Some(current) if current == *conn => {}
            _ => {
                tracing::debug!(
                    "Stale disconnect for {} on {}; skipping cleanup",
                    user,
                    conn
                );
                return;
            }
        }

        if let Some(peer) = self.calls.unpair(user) {
            match self.registry.lookup(&peer) {
                Some(peer_conn) => {
                    self.sink.send(&peer_conn, SignalEvent::CallEnded).await;
                }
                // Peer already gone; nothing to notify.
                None => tracing::debug!("Call peer {} of {} already offline", peer, user),
            }
        }

        self.registry.unregister_if(user, conn);
        tracing::info!("User {} disconnected", user);

        self.broadcast_online_users().await;
    }

    /// Connection handle for `user`, for collaborators addressing outbound
    /// messages.
    pub fn lookup_handle(&self, user: &UserId) -> Option<ConnectionId> {
        self.registry.lookup(user)
    }

    /// Record an active call pairing established by the signaling feature.
    pub fn record_pairing(&self, a: UserId, b: UserId) {
        self.calls.pair(a, b);
    }

    /// Current online identity set.
    pub fn current_online_users(&self) -> Vec<UserId> {
        self.registry.snapshot()
    }

    async fn broadcast_online_users(&self) {
        self.sink
            .broadcast(SignalEvent::OnlineUsers {
                users: self.registry.snapshot(),
            })
            .await;
    }
}

impl Clone for SessionCoordinator {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            calls: Arc::clone(&self.calls),
            sink: Arc::clone(&self.sink),
        }
    }
}
