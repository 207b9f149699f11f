//! Contact directory seam.
//!
//! The registry that actually stores contacts is an external collaborator;
//! the bridge only consumes the two lookup capabilities below. Errors here
//! are HTTP-agnostic and converted into `AppError` at the web boundary.

use async_trait::async_trait;
use thiserror::Error;

/// Internal registry record. The bridge only ever reads the stable
/// identifier; everything else the registry knows stays with the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub contact_id: String,
}

/// Operational failure while talking to the directory. An absent contact is
/// not an error; it is `Ok(None)`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("contact directory unavailable: {0}")]
    Unavailable(String),
}

/// Lookup capabilities consumed by the identity bridge.
///
/// Each call is a single read; the bridge never writes, caches, or retries.
/// Implementations decide their own timeout policy.
#[async_trait]
pub trait ContactDirectory: Send + Sync {
    async fn find_one_by_id(&self, contact_id: &str) -> Result<Option<Contact>, DirectoryError>;

    async fn find_one_by_email(&self, email: &str) -> Result<Option<Contact>, DirectoryError>;
}
