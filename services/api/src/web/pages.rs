//! services/api/src/web/pages.rs
//!
//! Delivery of the portal's HTML pages. The student landing page and the
//! login page are public; the admin page is gated, and an unauthenticated
//! request for it is answered with the login page content in place of the
//! requested page (a content substitution rather than an HTTP redirect, so
//! bookmarks to /admin.html keep working).

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::error;

use crate::web::middleware::is_admin;
use crate::web::state::AppState;

async fn serve_page(state: &AppState, name: &str) -> Response {
    let path = state.config.static_dir.join(name);
    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            bytes,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to read page {}: {}", path.display(), e);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

/// GET / - the student-facing portal page
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Response {
    serve_page(&state, "index.html").await
}

/// GET /admin-login - the login form
pub async fn login_page_handler(State(state): State<Arc<AppState>>) -> Response {
    serve_page(&state, "admin-login.html").await
}

/// GET /admin.html - the admin console, behind the soft-redirect gate
pub async fn admin_page_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    if is_admin(&headers, &state.signer) {
        serve_page(&state, "admin.html").await
    } else {
        serve_page(&state, "admin-login.html").await
    }
}
