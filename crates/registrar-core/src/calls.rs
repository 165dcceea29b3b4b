//! Active call pairing tracker

use dashmap::DashMap;
use std::sync::Arc;

use sigrelay_auth_core::UserId;

/// Records which two identities are currently paired in an active call.
///
/// Pairings are stored in both directions so teardown can start from either
/// side. A pairing is only meaningful while both identities are present in
/// the presence registry; the session layer enforces that lifecycle.
pub struct CallPairingTracker {
    pairs: Arc<DashMap<UserId, UserId>>,
}

impl CallPairingTracker {
    pub fn new() -> Self {
        Self {
            pairs: Arc::new(DashMap::new()),
        }
    }

    /// Record `a` and `b` as paired in an active call.
    pub fn pair(&self, a: UserId, b: UserId) {
        tracing::debug!("Pairing {} with {}", a, b);
        self.pairs.insert(a.clone(), b.clone());
        self.pairs.insert(b, a);
    }

    /// Tear down `user`'s pairing, returning the recorded peer if any.
    ///
    /// Removes the companion entry for the peer as well, without verifying
    /// that it points back. Idempotent: a second call returns `None`.
    pub fn unpair(&self, user: &UserId) -> Option<UserId> {
        let (_, peer) = self.pairs.remove(user)?;
        self.pairs.remove(&peer);
        tracing::debug!("Unpaired {} from {}", user, peer);
        Some(peer)
    }

    /// Read-only probe for the recorded peer of `user`.
    pub fn peer_of(&self, user: &UserId) -> Option<UserId> {
        self.pairs.get(user).map(|entry| entry.value().clone())
    }
}

impl Default for CallPairingTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CallPairingTracker {
    fn clone(&self) -> Self {
        Self {
            pairs: Arc::clone(&self.pairs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pair_records_both_directions() {
        let tracker = CallPairingTracker::new();
        tracker.pair(UserId::from("a"), UserId::from("b"));

        assert_eq!(tracker.peer_of(&UserId::from("a")), Some(UserId::from("b")));
        assert_eq!(tracker.peer_of(&UserId::from("b")), Some(UserId::from("a")));
    }

    #[test]
    fn test_unpair_clears_companion_entry() {
        let tracker = CallPairingTracker::new();
        tracker.pair(UserId::from("a"), UserId::from("b"));

        assert_eq!(tracker.unpair(&UserId::from("a")), Some(UserId::from("b")));
        assert_eq!(tracker.peer_of(&UserId::from("b")), None);
    }

    #[test]
    fn test_unpair_is_idempotent() {
        let tracker = CallPairingTracker::new();
        tracker.pair(UserId::from("a"), UserId::from("b"));

        assert_eq!(tracker.unpair(&UserId::from("a")), Some(UserId::from("b")));
        assert_eq!(tracker.unpair(&UserId::from("a")), None);
        assert_eq!(tracker.unpair(&UserId::from("b")), None);
    }

    #[test]
    fn test_repairing_replaces_previous_peer() {
        let tracker = CallPairingTracker::new();
        tracker.pair(UserId::from("a"), UserId::from("b"));
        tracker.pair(UserId::from("a"), UserId::from("c"));

        assert_eq!(tracker.peer_of(&UserId::from("a")), Some(UserId::from("c")));
        assert_eq!(tracker.peer_of(&UserId::from("c")), Some(UserId::from("a")));
    }
}
