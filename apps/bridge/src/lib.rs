#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod contacts;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod health;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::bridge::{resolution_plan, ContactQuery, IdentityBridge};
pub use auth::claims::{AppClaims, ProviderClaims};
pub use auth::codec::TokenError;
pub use contacts::{Contact, ContactDirectory, DirectoryError};
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::auth_token::AuthToken;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    bridge_test_support::logging::init();
}
