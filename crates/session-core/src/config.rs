//! Relay configuration

use serde::Deserialize;
use sigrelay_auth_core::AuthConfig;

/// Process-level relay configuration.
///
/// Loaded once at startup by the embedding application and handed to the
/// components that need it. `allowed_origins` is consumed by the transport
/// collaborator when accepting connections; the core itself only carries it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Credential verification settings
    pub auth: AuthConfig,
    /// Origins the transport layer accepts connections from
    pub allowed_origins: Vec<String>,
}
