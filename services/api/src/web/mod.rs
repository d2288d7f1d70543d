pub mod auth;
pub mod lessons;
pub mod middleware;
pub mod pages;
pub mod protocol;
pub mod session;
pub mod state;
pub mod upload;

pub use lessons::ApiDoc;

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use state::AppState;

/// Builds the portal's router: public reads and pages, plus the mutating
/// routes behind the admin gate. CORS and the Swagger UI are layered on by
/// the binary; tests drive this router directly.
pub fn router(app_state: Arc<AppState>) -> Router {
    // Public routes (no auth required). The admin page handler runs its own
    // gate check so it can substitute the login page instead of failing.
    let public_routes = Router::new()
        .route("/", get(pages::index_handler))
        .route("/admin.html", get(pages::admin_page_handler))
        .route("/admin-login", get(pages::login_page_handler))
        .route("/api/admin/login", post(auth::login_handler))
        .route("/api/admin/logout", post(auth::logout_handler))
        .route("/api/lessons", get(lessons::list_lessons_handler));

    // Protected routes (auth required).
    let protected_routes = Router::new()
        .route("/api/lessons", post(lessons::upsert_lesson_handler))
        .route("/api/lessons/{id}", delete(lessons::delete_lesson_handler))
        .route(
            "/api/upload",
            post(upload::upload_handler).layer(DefaultBodyLimit::max(upload::MAX_UPLOAD_BYTES)),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            middleware::require_admin,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .nest_service(
            "/video",
            tower_http::services::ServeDir::new(&app_state.config.media_dir),
        )
        .with_state(app_state)
}
