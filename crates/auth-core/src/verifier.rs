//! Token verification and handshake credential extraction

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::error::{AuthError, Result};
use crate::types::{AuthConfig, TokenClaims, UserId};

/// Credential material presented on a connection handshake.
///
/// A token may arrive through any of three channels, checked in precedence
/// order: the explicit auth payload field, a query parameter, or an
/// `Authorization: Bearer <token>` header. First non-empty wins.
#[derive(Debug, Clone, Default)]
pub struct HandshakeCredentials {
    /// Token from the handshake's auth payload field
    pub auth_token: Option<String>,
    /// Token from a query parameter
    pub query_token: Option<String>,
    /// Raw `Authorization` header value, if present
    pub authorization_header: Option<String>,
}

impl HandshakeCredentials {
    pub fn from_auth_payload(token: impl Into<String>) -> Self {
        Self {
            auth_token: Some(token.into()),
            ..Self::default()
        }
    }

    pub fn from_query(token: impl Into<String>) -> Self {
        Self {
            query_token: Some(token.into()),
            ..Self::default()
        }
    }

    pub fn from_bearer_header(header: impl Into<String>) -> Self {
        Self {
            authorization_header: Some(header.into()),
            ..Self::default()
        }
    }

    /// Resolve the effective token, if any channel carried one.
    ///
    /// Empty strings in a higher-precedence channel fall through to the next.
    /// A header without the `Bearer ` prefix is not a token source.
    pub fn token(&self) -> Option<&str> {
        if let Some(t) = self.auth_token.as_deref() {
            if !t.is_empty() {
                return Some(t);
            }
        }
        if let Some(t) = self.query_token.as_deref() {
            if !t.is_empty() {
                return Some(t);
            }
        }
        if let Some(h) = self.authorization_header.as_deref() {
            if let Some(t) = h.strip_prefix("Bearer ") {
                if !t.is_empty() {
                    return Some(t);
                }
            }
        }
        None
    }
}

/// Validates bearer tokens against the process-wide shared secret.
///
/// Pure function of the token and the secret; safe to share across all
/// connection handlers.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_seconds;
        validation.validate_exp = true;
        // Tokens carry no audience claim
        validation.validate_aud = false;

        Self {
            decoding_key: DecodingKey::from_secret(config.shared_secret.as_bytes()),
            validation,
        }
    }

    /// Verify a token and extract the identity encoded in its claims.
    pub fn verify(&self, token: &str) -> Result<UserId> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                ErrorKind::InvalidToken
                | ErrorKind::InvalidSignature
                | ErrorKind::Base64(_)
                | ErrorKind::Json(_)
                | ErrorKind::Utf8(_) => AuthError::MalformedToken,
                _ => AuthError::InvalidToken(e.to_string()),
            })?;

        Ok(UserId::new(data.claims.sub))
    }
}
