//! Stateless sign/verify primitives parameterized by secret.
//!
//! Both trust domains (identity-provider tokens and application tokens) go
//! through this single pair of functions; the caller supplies the secret for
//! the domain it is operating in. No default expiration is injected on sign:
//! a payload without `exp` is the caller's responsibility and will be
//! rejected on verify as malformed.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Classified verification/signing failure.
///
/// The Display output never contains token or secret material; it is safe to
/// log. Outward-facing error payloads must not carry it either way.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("malformed token: {0}")]
    Malformed(#[source] jsonwebtoken::errors::Error),
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Sign a claims payload with the given secret.
pub fn sign<C: Serialize>(
    claims: &C,
    secret: &[u8],
    algorithm: Algorithm,
) -> Result<String, TokenError> {
    encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(TokenError::Signing)
}

/// Verify a token against the given secret and decode its claims.
///
/// Expiration is checked here, against the token's embedded `exp`; no
/// additional expiry logic lives outside this primitive.
pub fn verify<C: DeserializeOwned>(
    token: &str,
    secret: &[u8],
    algorithm: Algorithm,
) -> Result<C, TokenError> {
    // Default Validation already checks exp; pin algorithm to the configured one.
    let validation = Validation::new(algorithm);

    decode::<C>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed(e),
        })
}
