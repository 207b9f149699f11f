//! Identity bridge: the trust boundary between the external identity
//! provider and this application's own tokens.
//!
//! A single issue call walks verify → resolve → mint, with no state shared
//! across calls beyond the read-only `SecurityConfig`. The one suspension
//! point is the directory lookup; its failure or absence outcome propagates
//! as-is, with no retry and no caching.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::auth::claims::{AppClaims, ProviderClaims};
use crate::auth::codec;
use crate::contacts::{Contact, ContactDirectory};
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::state::security_config::SecurityConfig;

/// One step of the contact resolution plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactQuery {
    ById(String),
    ByEmail(String),
}

/// Compute the ordered lookup plan for a request.
///
/// A configured impersonation id wins outright and the email is never
/// consulted; this mirrors the either/or behavior of the pre-production
/// override rather than a cascading fallback. With no impersonation id and
/// no email claim there is nothing to look up and the plan is empty.
pub fn resolution_plan(imposter_id: Option<&str>, mail: Option<&str>) -> Vec<ContactQuery> {
    if let Some(id) = imposter_id {
        return vec![ContactQuery::ById(id.to_string())];
    }

    match mail {
        Some(mail) => vec![ContactQuery::ByEmail(mail.to_string())],
        None => Vec::new(),
    }
}

/// Orchestrates provider-token verification, contact resolution, and
/// application-token issuance/validation.
#[derive(Clone)]
pub struct IdentityBridge {
    security: SecurityConfig,
    contacts: Arc<dyn ContactDirectory>,
}

impl IdentityBridge {
    pub fn new(security: SecurityConfig, contacts: Arc<dyn ContactDirectory>) -> Self {
        Self { security, contacts }
    }

    /// Verify an identity-provider token, resolve the caller's contact, and
    /// mint a new application token carrying the contact id. All-or-nothing:
    /// no partial token is ever returned.
    pub async fn issue_app_token(&self, provider_token: &str) -> Result<String, AppError> {
        let provider: ProviderClaims = codec::verify(
            provider_token,
            &self.security.provider_secret,
            self.security.algorithm,
        )
        .map_err(|kind| {
            let detail = kind.to_string();
            warn!(error = %Redacted(&detail), "identity provider token rejected");
            AppError::provider_token_rejected(kind)
        })?;

        let plan = resolution_plan(
            self.security.imposter_contact_id.as_deref(),
            provider.mail.as_deref(),
        );

        let mut contact: Option<Contact> = None;
        for query in &plan {
            contact = match query {
                ContactQuery::ById(id) => self.contacts.find_one_by_id(id).await?,
                ContactQuery::ByEmail(email) => self.contacts.find_one_by_email(email).await?,
            };
            if contact.is_some() {
                break;
            }
        }

        let Some(contact) = contact else {
            if let Some(mail) = provider.mail.as_deref() {
                info!(email = %Redacted(mail), "no contact found for verified provider token");
            } else {
                info!("no contact found: provider token carried no email claim");
            }
            return Err(AppError::no_contact_found(provider.mail));
        };

        debug!(contact_id = %contact.contact_id, "contact resolved, minting application token");

        let claims = AppClaims::for_contact(contact.contact_id, provider);
        codec::sign(&claims, &self.security.app_secret, self.security.algorithm)
            .map_err(|e| AppError::internal(format!("failed to sign application token: {e}")))
    }

    /// Verify a previously issued application token and return its claims.
    pub fn validate_app_token(&self, app_token: &str) -> Result<AppClaims, AppError> {
        codec::verify(
            app_token,
            &self.security.app_secret,
            self.security.algorithm,
        )
        .map_err(|kind| {
            let detail = kind.to_string();
            warn!(error = %Redacted(&detail), "application token rejected");
            AppError::app_token_rejected(kind)
        })
    }
}
