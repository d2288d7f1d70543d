//! services/api/src/web/middleware.rs
//!
//! Authorization gate for the mutating API routes.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::web::protocol::failure;
use crate::web::session::{CookieSigner, COOKIE_NAME, TOKEN_VALUE};
use crate::web::state::AppState;

/// Returns true when the request carries a correctly signed admin session
/// cookie. Missing, unsigned, wrong-value, and tampered cookies are all the
/// same failure.
pub fn is_admin(headers: &axum::http::HeaderMap, signer: &CookieSigner) -> bool {
    let Some(cookie_header) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let Some(signed) = cookie_header.split(';').find_map(|c| {
        let c = c.trim();
        c.strip_prefix(COOKIE_NAME).and_then(|rest| rest.strip_prefix('='))
    }) else {
        return false;
    };
    signer.verify(signed).as_deref() == Some(TOKEN_VALUE)
}

/// Middleware that rejects unauthenticated requests to mutating endpoints
/// with a JSON 401 body.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    if !is_admin(req.headers(), &state.signer) {
        return failure(StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }
    next.run(req).await
}
