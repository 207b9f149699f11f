use jsonwebtoken::Algorithm;

use crate::error::AppError;

/// Environment variable holding the identity-provider signing secret.
pub const PROVIDER_SECRET_VAR: &str = "BRIDGE_PROVIDER_TOKEN_SECRET";
/// Environment variable holding the application signing secret.
pub const APP_SECRET_VAR: &str = "BRIDGE_APP_TOKEN_SECRET";
/// Environment variable holding the optional impersonation contact id.
/// Absent or empty means the override is disabled.
pub const IMPOSTER_ID_VAR: &str = "BRIDGE_IMPOSTER_CONTACT_ID";

/// Immutable signing configuration for both trust domains.
///
/// Constructed once at startup and passed by reference into the identity
/// bridge; never process-global, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Secret shared with the external identity provider
    pub provider_secret: Vec<u8>,
    /// Secret private to this application
    pub app_secret: Vec<u8>,
    /// Fixed contact id used to bypass email resolution in pre-production.
    /// `None` disables the branch unconditionally.
    pub imposter_contact_id: Option<String>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given signing secrets.
    pub fn new(provider_secret: impl Into<Vec<u8>>, app_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            provider_secret: provider_secret.into(),
            app_secret: app_secret.into(),
            imposter_contact_id: None,
            algorithm: Algorithm::HS256,
        }
    }

    /// Set the impersonation contact id. An empty or whitespace-only value
    /// normalizes to `None`, so a configuration key that exists but is
    /// empty-valued cannot enable the override.
    pub fn with_imposter_contact_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.imposter_contact_id = if id.trim().is_empty() { None } else { Some(id) };
        self
    }

    /// Read the three secrets from the environment. The two signing secrets
    /// are required; the impersonation id is optional.
    pub fn from_env() -> Result<Self, AppError> {
        let provider_secret = std::env::var(PROVIDER_SECRET_VAR)
            .map_err(|_| AppError::config(format!("{PROVIDER_SECRET_VAR} must be set")))?;
        let app_secret = std::env::var(APP_SECRET_VAR)
            .map_err(|_| AppError::config(format!("{APP_SECRET_VAR} must be set")))?;
        let imposter_id = std::env::var(IMPOSTER_ID_VAR).unwrap_or_default();

        Ok(Self::new(provider_secret.as_bytes(), app_secret.as_bytes())
            .with_imposter_contact_id(imposter_id))
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::{SecurityConfig, APP_SECRET_VAR, IMPOSTER_ID_VAR, PROVIDER_SECRET_VAR};

    #[test]
    fn test_empty_imposter_id_is_disabled() {
        let config = SecurityConfig::new(b"p".to_vec(), b"a".to_vec()).with_imposter_contact_id("");
        assert_eq!(config.imposter_contact_id, None);

        let config =
            SecurityConfig::new(b"p".to_vec(), b"a".to_vec()).with_imposter_contact_id("   ");
        assert_eq!(config.imposter_contact_id, None);
    }

    #[test]
    fn test_non_empty_imposter_id_is_kept() {
        let config =
            SecurityConfig::new(b"p".to_vec(), b"a".to_vec()).with_imposter_contact_id("IMP-1");
        assert_eq!(config.imposter_contact_id.as_deref(), Some("IMP-1"));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_all_three_values() {
        std::env::set_var(PROVIDER_SECRET_VAR, "provider-secret");
        std::env::set_var(APP_SECRET_VAR, "app-secret");
        std::env::set_var(IMPOSTER_ID_VAR, "IMP-1");

        let config = SecurityConfig::from_env().unwrap();
        assert_eq!(config.provider_secret, b"provider-secret");
        assert_eq!(config.app_secret, b"app-secret");
        assert_eq!(config.imposter_contact_id.as_deref(), Some("IMP-1"));

        std::env::remove_var(PROVIDER_SECRET_VAR);
        std::env::remove_var(APP_SECRET_VAR);
        std::env::remove_var(IMPOSTER_ID_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_empty_imposter_id_disables_override() {
        std::env::set_var(PROVIDER_SECRET_VAR, "provider-secret");
        std::env::set_var(APP_SECRET_VAR, "app-secret");
        std::env::set_var(IMPOSTER_ID_VAR, "");

        let config = SecurityConfig::from_env().unwrap();
        assert_eq!(config.imposter_contact_id, None);

        std::env::remove_var(PROVIDER_SECRET_VAR);
        std::env::remove_var(APP_SECRET_VAR);
        std::env::remove_var(IMPOSTER_ID_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_missing_secret_is_a_config_error() {
        std::env::remove_var(PROVIDER_SECRET_VAR);
        std::env::remove_var(APP_SECRET_VAR);

        assert!(SecurityConfig::from_env().is_err());
    }
}
