//! Claim payloads for the two trust domains.

use serde::{Deserialize, Serialize};

/// Decoded payload of an inbound identity-provider token.
///
/// Everything except `exp` is opaque pass-through: no field is validated for
/// shape beyond successful signature verification, and absent fields stay
/// absent when the claims are re-serialized into an application token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderClaims {
    /// Expiry (seconds since epoch)
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Shape varies upstream (bool or string); carried through untouched.
    #[serde(
        rename = "nycExtEmailValidationFlag",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub email_validation_flag: Option<serde_json::Value>,
    /// Provider-assigned unique identifier
    #[serde(rename = "GUID", default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(rename = "userType", default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    /// Terms-of-use version accepted by the account
    #[serde(
        rename = "nycExtTOUVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub tou_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// Payload of an application token: the full provider claim set plus the
/// resolved contact's internal identifier, re-signed with the application
/// secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppClaims {
    /// Expiry carried over verbatim from the provider token; the bridge
    /// neither extends nor shortens the validity window.
    pub exp: i64,
    /// Contact registry id, added for later lookups by downstream services
    #[serde(rename = "contactId")]
    pub contact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(
        rename = "nycExtEmailValidationFlag",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub email_validation_flag: Option<serde_json::Value>,
    #[serde(rename = "GUID", default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(rename = "userType", default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(
        rename = "nycExtTOUVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub tou_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl AppClaims {
    /// Build an application payload for a resolved contact. Only called after
    /// contact resolution succeeds; there is no way to construct one without
    /// a contact id.
    pub fn for_contact(contact_id: String, provider: ProviderClaims) -> Self {
        Self {
            exp: provider.exp,
            contact_id,
            mail: provider.mail,
            scope: provider.scope,
            email_validation_flag: provider.email_validation_flag,
            guid: provider.guid,
            user_type: provider.user_type,
            tou_version: provider.tou_version,
            jti: provider.jti,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{AppClaims, ProviderClaims};

    #[test]
    fn test_absent_provider_claims_stay_absent() {
        let provider: ProviderClaims =
            serde_json::from_value(json!({ "exp": 1_900_000_000, "mail": "a@b.com" })).unwrap();

        let app = AppClaims::for_contact("C1".to_string(), provider);
        let value = serde_json::to_value(&app).unwrap();

        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&"exp"));
        assert!(keys.contains(&"contactId"));
        assert!(keys.contains(&"mail"));
    }

    #[test]
    fn test_wire_names_match_provider_payload() {
        let app = AppClaims {
            exp: 1_900_000_000,
            contact_id: "C1".to_string(),
            mail: Some("a@b.com".to_string()),
            scope: Some("openid".to_string()),
            email_validation_flag: Some(json!("TRUE")),
            guid: Some("guid-1".to_string()),
            user_type: Some("Individual".to_string()),
            tou_version: Some("2".to_string()),
            jti: Some("jti-1".to_string()),
        };

        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(value["contactId"], "C1");
        assert_eq!(value["GUID"], "guid-1");
        assert_eq!(value["userType"], "Individual");
        assert_eq!(value["nycExtTOUVersion"], "2");
        assert_eq!(value["nycExtEmailValidationFlag"], "TRUE");
    }

    #[test]
    fn test_exp_is_carried_verbatim() {
        let provider: ProviderClaims =
            serde_json::from_value(json!({ "exp": 1_234_567_890 })).unwrap();

        let app = AppClaims::for_contact("C1".to_string(), provider);
        assert_eq!(app.exp, 1_234_567_890);
    }
}
