use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::auth::codec::TokenError;
use crate::contacts::DirectoryError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Application-level error. The Display output (via thiserror) is for logs;
/// outward-facing payloads are built from `code()`/`detail()`, which never
/// carry verification internals, secrets, or raw token contents.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("provider token rejected: {kind}")]
    ProviderTokenRejected { kind: TokenError },
    #[error("no contact found")]
    NoContactFound { email: Option<String> },
    #[error("application token rejected: {kind}")]
    AppTokenRejected { kind: TokenError },
    #[error("missing or malformed bearer token")]
    UnauthorizedMissingBearer,
    #[error("contact directory unavailable: {detail}")]
    DirectoryUnavailable { detail: String },
    #[error("bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("configuration error: {detail}")]
    Config { detail: String },
    #[error("internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    fn code(&self) -> ErrorCode {
        match self {
            AppError::ProviderTokenRejected { .. } => ErrorCode::InvalidProviderToken,
            AppError::NoContactFound { .. } => ErrorCode::NoContactFound,
            AppError::AppTokenRejected { .. } => ErrorCode::InvalidAppToken,
            AppError::UnauthorizedMissingBearer => ErrorCode::UnauthorizedMissingBearer,
            AppError::DirectoryUnavailable { .. } => ErrorCode::DirectoryUnavailable,
            AppError::BadRequest { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// Outward-facing detail. The attempted email in `NoContactFound` is the
    /// one piece of caller-supplied data allowed through; everything else is
    /// a fixed string.
    fn detail(&self) -> String {
        match self {
            AppError::ProviderTokenRejected { .. } => {
                "Could not verify identity provider token".to_string()
            }
            AppError::NoContactFound { email } => match email {
                Some(email) => format!("Contact not found for given email or ID: {email}"),
                None => "Contact not found: provider token carried no email claim".to_string(),
            },
            AppError::AppTokenRejected { .. } => "Could not verify token".to_string(),
            AppError::UnauthorizedMissingBearer => "Missing or malformed Bearer token".to_string(),
            AppError::DirectoryUnavailable { .. } => {
                "Contact directory is unavailable".to_string()
            }
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
            AppError::Internal { .. } => "Internal server error".to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ProviderTokenRejected { .. } => StatusCode::UNAUTHORIZED,
            AppError::NoContactFound { .. } => StatusCode::UNAUTHORIZED,
            AppError::AppTokenRejected { .. } => StatusCode::BAD_REQUEST,
            AppError::UnauthorizedMissingBearer => StatusCode::UNAUTHORIZED,
            AppError::DirectoryUnavailable { .. } => StatusCode::BAD_GATEWAY,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn provider_token_rejected(kind: TokenError) -> Self {
        Self::ProviderTokenRejected { kind }
    }

    pub fn no_contact_found(email: Option<String>) -> Self {
        Self::NoContactFound { email }
    }

    pub fn app_token_rejected(kind: TokenError) -> Self {
        Self::AppTokenRejected { kind }
    }

    pub fn unauthorized_missing_bearer() -> Self {
        Self::UnauthorizedMissingBearer
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<DirectoryError> for AppError {
    fn from(e: DirectoryError) -> Self {
        match e {
            DirectoryError::Unavailable(detail) => AppError::DirectoryUnavailable { detail },
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code().to_string();
        let detail = self.detail();
        let trace_id = trace_ctx::trace_id();

        let problem_details = ProblemDetails {
            type_: format!("https://bridge.example.com/errors/{code}"),
            title: Self::humanize_code(&code),
            status: status.as_u16(),
            detail,
            code,
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id))
            .json(problem_details)
    }
}
