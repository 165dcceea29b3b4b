//! Presence registry

pub mod store;

pub use store::PresenceRegistry;
