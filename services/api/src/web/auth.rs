//! services/api/src/web/auth.rs
//!
//! Authentication endpoints for admin login and logout.
//!
//! There is a single shared admin credential, checked by exact string
//! equality; a successful login issues the one valid session token as a
//! signed cookie. No per-token identity, no expiry.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use crate::web::protocol::{failure, ApiFailure, ApiJson, ErrorBody, SuccessResponse};
use crate::web::session::{COOKIE_NAME, TOKEN_VALUE};
use crate::web::state::AppState;

//=========================================================================================
// Request Types
//=========================================================================================

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

//=========================================================================================
// Handlers
//=========================================================================================

/// POST /api/admin/login - Authenticate with the shared admin credential
#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = SuccessResponse),
        (status = 401, description = "Invalid credentials", body = ErrorBody)
    )
)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiFailure> {
    // Case-sensitive equality on both fields; anything else is a failed login.
    if req.username != state.config.admin_username
        || req.password != state.config.admin_password
    {
        return Err(failure(StatusCode::UNAUTHORIZED, "Invalid credentials"));
    }

    info!("Admin login succeeded");
    let cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/",
        COOKIE_NAME,
        state.signer.sign(TOKEN_VALUE)
    );

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SuccessResponse::ok()),
    ))
}

/// POST /api/admin/logout - Instruct the client to discard the session cookie
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    responses(
        (status = 200, description = "Cookie cleared", body = SuccessResponse)
    )
)]
pub async fn logout_handler() -> impl IntoResponse {
    let cookie = format!("{}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0", COOKIE_NAME);
    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SuccessResponse::ok()),
    )
}
