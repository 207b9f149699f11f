//! Token mint helpers for tests

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::Algorithm;
use serde_json::json;

/// Seconds since epoch, one hour in the future.
pub fn future_exp() -> i64 {
    epoch_seconds(SystemTime::now() + Duration::from_secs(3600))
}

/// Seconds since epoch, two hours in the past (beyond verification leeway).
pub fn past_exp() -> i64 {
    epoch_seconds(SystemTime::now() - Duration::from_secs(7200))
}

fn epoch_seconds(at: SystemTime) -> i64 {
    at.duration_since(UNIX_EPOCH)
        .expect("time should be after the epoch")
        .as_secs() as i64
}

/// Mint a provider-style token with a `mail` claim.
pub fn mint_provider_token(mail: &str, exp: i64, secret: &[u8]) -> String {
    bridge::auth::codec::sign(&json!({ "mail": mail, "exp": exp }), secret, Algorithm::HS256)
        .expect("should mint provider token")
}

/// Full Authorization header value including the "Bearer " prefix.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}
