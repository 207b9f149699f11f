use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::auth_token::AuthToken;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Token issued by the external identity provider
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Exchange an identity-provider token for an application token.
async fn login(
    req: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if req.token.trim().is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::MissingToken,
            "Token cannot be empty",
        ));
    }

    let token = app_state.bridge.issue_app_token(&req.token).await?;

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

/// Validate the presented application token and echo back its claims.
async fn session(
    auth: AuthToken,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let claims = app_state.bridge.validate_app_token(&auth.token)?;

    Ok(HttpResponse::Ok().json(claims))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/auth/login").route(web::post().to(login)))
        .service(web::resource("/api/auth/session").route(web::get().to(session)));
}
