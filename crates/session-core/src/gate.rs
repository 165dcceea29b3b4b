//! Connection authentication gate

use std::sync::Arc;

use sigrelay_auth_core::{AuthError, HandshakeCredentials, Result, TokenVerifier, UserId};

/// Gatekeeper invoked exactly once per incoming connection attempt, before
/// the attempt is admitted to the presence registry.
///
/// On success the resolved identity is returned for the transport layer to
/// attach to the attempt's context; on failure the attempt is rejected with
/// the specific [`AuthError`] and never reaches admission.
pub struct ConnectionGate {
    verifier: Arc<TokenVerifier>,
}

impl ConnectionGate {
    pub fn new(verifier: Arc<TokenVerifier>) -> Self {
        Self { verifier }
    }

    /// Resolve the attempt's identity from its handshake credentials.
    pub fn admit(&self, credentials: &HandshakeCredentials) -> Result<UserId> {
        let token = credentials.token().ok_or_else(|| {
            tracing::warn!("Connection attempt rejected: no token provided");
            AuthError::MissingToken
        })?;

        match self.verifier.verify(token) {
            Ok(user) => Ok(user),
            Err(e) => {
                tracing::warn!("Connection attempt rejected: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use pretty_assertions::assert_eq;
    use sigrelay_auth_core::{AuthConfig, TokenClaims};

    const SECRET: &str = "gate-test-secret";

    fn gate() -> ConnectionGate {
        ConnectionGate::new(Arc::new(TokenVerifier::new(&AuthConfig::new(SECRET))))
    }

    fn token_for(user: &str, ttl_seconds: i64) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &TokenClaims::expiring_in(&UserId::from(user), ttl_seconds),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_credentials_resolve_identity() {
        let creds = HandshakeCredentials::from_auth_payload(token_for("u1", 900));
        assert_eq!(gate().admit(&creds), Ok(UserId::from("u1")));
    }

    #[test]
    fn test_missing_token_rejected() {
        assert_eq!(
            gate().admit(&HandshakeCredentials::default()),
            Err(AuthError::MissingToken)
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let creds = HandshakeCredentials::from_query(token_for("u1", -60));
        assert_eq!(gate().admit(&creds), Err(AuthError::ExpiredToken));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let creds = HandshakeCredentials::from_bearer_header("Bearer garbage");
        assert_eq!(gate().admit(&creds), Err(AuthError::MalformedToken));
    }
}
