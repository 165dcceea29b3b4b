//! Error types for authentication operations

use thiserror::Error;

/// Closed taxonomy of authentication failures.
///
/// Every variant is terminal for the connection attempt that produced it: the
/// attempt is rejected with the variant's reason string and never reaches the
/// presence registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("No token provided")]
    MissingToken,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;
