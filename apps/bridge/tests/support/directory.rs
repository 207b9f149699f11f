//! In-memory contact directory for integration tests, with call counters so
//! tests can assert which lookup branch ran (or that none did).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bridge::contacts::{Contact, ContactDirectory, DirectoryError};

#[derive(Default)]
pub struct MockDirectory {
    by_id: HashMap<String, Contact>,
    by_email: HashMap<String, Contact>,
    id_calls: AtomicUsize,
    email_calls: AtomicUsize,
}

impl MockDirectory {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: &str, contact_id: &str) -> Self {
        self.by_email.insert(
            email.to_string(),
            Contact {
                contact_id: contact_id.to_string(),
            },
        );
        self
    }

    pub fn with_id(mut self, id: &str, contact_id: &str) -> Self {
        self.by_id.insert(
            id.to_string(),
            Contact {
                contact_id: contact_id.to_string(),
            },
        );
        self
    }

    pub fn id_calls(&self) -> usize {
        self.id_calls.load(Ordering::SeqCst)
    }

    pub fn email_calls(&self) -> usize {
        self.email_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContactDirectory for MockDirectory {
    async fn find_one_by_id(&self, contact_id: &str) -> Result<Option<Contact>, DirectoryError> {
        self.id_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.by_id.get(contact_id).cloned())
    }

    async fn find_one_by_email(&self, email: &str) -> Result<Option<Contact>, DirectoryError> {
        self.email_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.by_email.get(email).cloned())
    }
}

/// Directory whose lookups always fail operationally.
pub struct UnavailableDirectory;

#[async_trait]
impl ContactDirectory for UnavailableDirectory {
    async fn find_one_by_id(&self, _contact_id: &str) -> Result<Option<Contact>, DirectoryError> {
        Err(DirectoryError::Unavailable(
            "connection refused".to_string(),
        ))
    }

    async fn find_one_by_email(&self, _email: &str) -> Result<Option<Contact>, DirectoryError> {
        Err(DirectoryError::Unavailable(
            "connection refused".to_string(),
        ))
    }
}
