//! Identity and configuration types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable logical user identity extracted from a verified credential.
///
/// Does not change for the lifetime of a connection; the same identity may
/// own successive connections over time (reconnects).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Claims carried by a relay access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration (unix seconds)
    pub exp: u64,
    /// Issued at (unix seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
}

impl TokenClaims {
    /// Claims for `user` expiring `ttl_seconds` from now.
    pub fn expiring_in(user: &UserId, ttl_seconds: i64) -> Self {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::seconds(ttl_seconds);
        Self {
            sub: user.0.clone(),
            exp: exp.timestamp() as u64,
            iat: Some(now.timestamp() as u64),
        }
    }
}

/// Verifier configuration.
///
/// The shared secret is read once at process start by the embedding
/// application's config loader and handed in here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 shared secret for token verification
    pub shared_secret: String,
    /// Clock-skew leeway applied to expiry checks
    pub leeway_seconds: u64,
}

impl AuthConfig {
    pub fn new(shared_secret: impl Into<String>) -> Self {
        Self {
            shared_secret: shared_secret.into(),
            ..Self::default()
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            shared_secret: String::new(),
            leeway_seconds: 30,
        }
    }
}
