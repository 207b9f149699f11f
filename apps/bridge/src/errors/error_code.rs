//! Centralized error codes for the bridge API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Each
//! variant maps 1:1 to the SCREAMING_SNAKE_CASE string that appears in HTTP
//! responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Identity-provider token failed verification (untrusted, malformed or expired)
    InvalidProviderToken,
    /// Contact resolution returned no record
    NoContactFound,

    // Request Validation
    /// Application token failed verification
    InvalidAppToken,
    /// Required token field missing or empty
    MissingToken,
    /// General validation error
    ValidationError,

    // System Errors
    /// Contact directory lookup failed operationally
    DirectoryUnavailable,
    /// Configuration error
    ConfigError,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            ErrorCode::InvalidProviderToken => "INVALID_PROVIDER_TOKEN",
            ErrorCode::NoContactFound => "NO_CONTACT_FOUND",
            ErrorCode::InvalidAppToken => "INVALID_APP_TOKEN",
            ErrorCode::MissingToken => "MISSING_TOKEN",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::DirectoryUnavailable => "DIRECTORY_UNAVAILABLE",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
