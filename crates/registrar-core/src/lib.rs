//! # Registrar-Core - Presence Registry for Sigrelay
//!
//! Authoritative in-memory mapping between logical user identities and their
//! live transport connections, plus the secondary tracker recording which two
//! identities are currently paired in an active call.
//!
//! All state is process-local and scoped to process lifetime. Every mutation
//! is a total function over its domain (overwrite or no-op), so none of the
//! operations here can fail.

pub mod calls;
pub mod presence;
pub mod types;

pub use calls::CallPairingTracker;
pub use presence::PresenceRegistry;
pub use types::ConnectionId;

// Re-exported so collaborators only need one registrar import for key types.
pub use sigrelay_auth_core::UserId;
