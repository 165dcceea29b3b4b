//! # Session-Core - Lifecycle Coordination for Sigrelay
//!
//! Orchestrates the life of every relay connection: the authentication gate a
//! connection attempt must pass, admission into the presence registry with a
//! presence broadcast, and the invariant-preserving cleanup that runs on
//! disconnect, including the targeted `call:ended` notice to a paired peer.
//!
//! The transport layer (socket accept loops, framing, actual delivery) stays
//! outside this crate; it integrates through the [`SignalSink`] trait and
//! calls [`ConnectionGate::admit`] / [`SessionCoordinator`] transitions at
//! its hook points.
//!
//! Connection attempt state machine:
//!
//! ```text
//! Pending --gate ok--> Authenticated --admit--> Admitted --disconnect--> Disconnected
//!    |
//!    +--gate fail--> rejected (attempt discarded, registry untouched)
//! ```

pub mod config;
pub mod coordinator;
pub mod events;
pub mod gate;
pub mod transport;

pub use config::RelayConfig;
pub use coordinator::SessionCoordinator;
pub use events::SignalEvent;
pub use gate::ConnectionGate;
pub use transport::SignalSink;

pub use sigrelay_auth_core::{AuthConfig, AuthError, HandshakeCredentials, TokenVerifier, UserId};
pub use sigrelay_registrar_core::{CallPairingTracker, ConnectionId, PresenceRegistry};
