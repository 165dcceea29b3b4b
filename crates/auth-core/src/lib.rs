//! # Auth-Core - Connection Authentication for Sigrelay
//!
//! This crate provides the credential verification gate that every incoming
//! relay connection must pass before it is admitted to the presence registry.
//! Verification is a pure function of the presented bearer token and a
//! process-wide shared secret; no network calls, no side effects.

pub mod error;
pub mod types;
pub mod verifier;

pub use error::{AuthError, Result};
pub use types::{AuthConfig, TokenClaims, UserId};
pub use verifier::{HandshakeCredentials, TokenVerifier};
