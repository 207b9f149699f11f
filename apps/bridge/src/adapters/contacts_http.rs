//! HTTP-backed implementation of the contact directory seam.
//!
//! The registry itself lives elsewhere; this adapter only translates the two
//! lookup capabilities onto its REST surface:
//!
//!   GET {base}/contacts/{id}       -> 200 record | 404
//!   GET {base}/contacts?email=...  -> 200 [record, ...]
//!
//! An absent contact maps to `Ok(None)`; transport failures and unexpected
//! statuses map to `DirectoryError::Unavailable`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::contacts::{Contact, ContactDirectory, DirectoryError};
use crate::error::AppError;

/// Environment variable holding the registry base URL.
pub const CONTACTS_BASE_URL_VAR: &str = "BRIDGE_CONTACTS_BASE_URL";

/// Wire shape of a registry record; the registry spells the id field
/// `contactid`.
#[derive(Debug, Deserialize)]
struct ContactRecord {
    contactid: String,
}

impl From<ContactRecord> for Contact {
    fn from(record: ContactRecord) -> Self {
        Contact {
            contact_id: record.contactid,
        }
    }
}

pub struct HttpContactDirectory {
    client: Client,
    base_url: Url,
}

impl HttpContactDirectory {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Build from BRIDGE_CONTACTS_BASE_URL. A trailing slash is appended if
    /// missing so that joins resolve under the configured path.
    pub fn from_env() -> Result<Self, AppError> {
        let mut raw = std::env::var(CONTACTS_BASE_URL_VAR)
            .map_err(|_| AppError::config(format!("{CONTACTS_BASE_URL_VAR} must be set")))?;
        if !raw.ends_with('/') {
            raw.push('/');
        }

        let base_url = Url::parse(&raw).map_err(|e| {
            AppError::config(format!("{CONTACTS_BASE_URL_VAR} is not a valid URL: {e}"))
        })?;

        Ok(Self::new(base_url))
    }

    fn unavailable(e: impl std::fmt::Display) -> DirectoryError {
        DirectoryError::Unavailable(e.to_string())
    }
}

#[async_trait]
impl ContactDirectory for HttpContactDirectory {
    async fn find_one_by_id(&self, contact_id: &str) -> Result<Option<Contact>, DirectoryError> {
        let url = self
            .base_url
            .join(&format!("contacts/{contact_id}"))
            .map_err(Self::unavailable)?;

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(Self::unavailable)?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let record: ContactRecord = resp
            .error_for_status()
            .map_err(Self::unavailable)?
            .json()
            .await
            .map_err(Self::unavailable)?;

        Ok(Some(record.into()))
    }

    async fn find_one_by_email(&self, email: &str) -> Result<Option<Contact>, DirectoryError> {
        let mut url = self.base_url.join("contacts").map_err(Self::unavailable)?;
        url.query_pairs_mut().append_pair("email", email);

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(Self::unavailable)?;

        let records: Vec<ContactRecord> = resp
            .error_for_status()
            .map_err(Self::unavailable)?
            .json()
            .await
            .map_err(Self::unavailable)?;

        Ok(records.into_iter().next().map(Contact::from))
    }
}
