use std::sync::Arc;

use crate::auth::bridge::IdentityBridge;
use crate::contacts::ContactDirectory;
use crate::state::security_config::SecurityConfig;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// The identity bridge; stateless per request, cheap to clone
    pub bridge: IdentityBridge,
}

impl AppState {
    /// Create a new AppState with the given security config and directory
    pub fn new(security: SecurityConfig, contacts: Arc<dyn ContactDirectory>) -> Self {
        Self {
            bridge: IdentityBridge::new(security, contacts),
        }
    }
}
