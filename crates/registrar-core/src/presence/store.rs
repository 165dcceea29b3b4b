//! Presence binding storage

use dashmap::DashMap;
use std::sync::Arc;

use crate::types::ConnectionId;
use sigrelay_auth_core::UserId;

/// In-memory presence registry.
///
/// Holds at most one binding per identity: an identity is present iff it has
/// exactly one currently-admitted, not-yet-disconnected connection. A new
/// successful connection for an already-present identity overwrites the old
/// binding (last-connection-wins); the registry never closes the superseded
/// connection.
pub struct PresenceRegistry {
    /// Map of user identity to live connection handle
    bindings: Arc<DashMap<UserId, ConnectionId>>,
}

impl PresenceRegistry {
    pub fn new() -> Self {
        Self {
            bindings: Arc::new(DashMap::new()),
        }
    }

    /// Insert or overwrite the binding for `user`.
    ///
    /// Always succeeds; returns the superseded handle if one existed.
    pub fn register(&self, user: UserId, conn: ConnectionId) -> Option<ConnectionId> {
        let superseded = self.bindings.insert(user.clone(), conn.clone());
        match &superseded {
            Some(old) => tracing::debug!(
                "Re-registered {} on connection {} (superseding {})",
                user,
                conn,
                old
            ),
            None => tracing::debug!("Registered {} on connection {}", user, conn),
        }
        superseded
    }

    /// Remove the binding for `user` regardless of which connection owns it.
    ///
    /// No-op (not an error) if absent.
    pub fn unregister(&self, user: &UserId) {
        if self.bindings.remove(user).is_some() {
            tracing::debug!("Unregistered {}", user);
        }
    }

    /// Remove the binding for `user` only if it is still owned by `conn`.
    ///
    /// This is the disconnect-cleanup path: removal is scoped to the exact
    /// disconnecting handle so a delayed disconnect can never erase a later
    /// reconnect's binding. Returns whether a removal happened.
    pub fn unregister_if(&self, user: &UserId, conn: &ConnectionId) -> bool {
        let removed = self
            .bindings
            .remove_if(user, |_, current| current == conn)
            .is_some();
        if removed {
            tracing::debug!("Unregistered {} (connection {})", user, conn);
        }
        removed
    }

    /// Current connection handle for `user`, if admitted.
    pub fn lookup(&self, user: &UserId) -> Option<ConnectionId> {
        self.bindings.get(user).map(|entry| entry.value().clone())
    }

    /// Point-in-time set of online identities, for presence broadcasts.
    pub fn snapshot(&self) -> Vec<UserId> {
        self.bindings.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn contains(&self, user: &UserId) -> bool {
        self.bindings.contains_key(user)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for PresenceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PresenceRegistry {
    fn clone(&self) -> Self {
        Self {
            bindings: Arc::clone(&self.bindings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_register_then_lookup() {
        let registry = PresenceRegistry::new();
        let conn = ConnectionId::fresh();

        registry.register(UserId::from("u1"), conn.clone());
        assert_eq!(registry.lookup(&UserId::from("u1")), Some(conn));
    }

    #[test]
    fn test_register_overwrites_and_returns_superseded() {
        let registry = PresenceRegistry::new();
        let h1 = ConnectionId::fresh();
        let h2 = ConnectionId::fresh();

        assert_eq!(registry.register(UserId::from("u1"), h1.clone()), None);
        assert_eq!(
            registry.register(UserId::from("u1"), h2.clone()),
            Some(h1)
        );
        assert_eq!(registry.lookup(&UserId::from("u1")), Some(h2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister_is_idempotent() {
        let registry = PresenceRegistry::new();
        registry.register(UserId::from("u1"), ConnectionId::fresh());

        registry.unregister(&UserId::from("u1"));
        assert_eq!(registry.lookup(&UserId::from("u1")), None);

        // Second removal is a no-op, not an error
        registry.unregister(&UserId::from("u1"));
        assert_eq!(registry.lookup(&UserId::from("u1")), None);
    }

    #[test]
    fn test_unregister_if_skips_stale_handle() {
        let registry = PresenceRegistry::new();
        let h1 = ConnectionId::fresh();
        let h2 = ConnectionId::fresh();

        // u1 connects on h1, reconnects on h2, then h1's delayed cleanup runs
        registry.register(UserId::from("u1"), h1.clone());
        registry.register(UserId::from("u1"), h2.clone());

        assert!(!registry.unregister_if(&UserId::from("u1"), &h1));
        assert_eq!(registry.lookup(&UserId::from("u1")), Some(h2.clone()));

        assert!(registry.unregister_if(&UserId::from("u1"), &h2));
        assert_eq!(registry.lookup(&UserId::from("u1")), None);
    }

    #[test]
    fn test_snapshot_matches_bindings() {
        let registry = PresenceRegistry::new();
        registry.register(UserId::from("u1"), ConnectionId::fresh());
        registry.register(UserId::from("u2"), ConnectionId::fresh());

        let mut snapshot = registry.snapshot();
        snapshot.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(snapshot, vec![UserId::from("u1"), UserId::from("u2")]);
    }
}
