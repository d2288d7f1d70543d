//! services/api/src/web/lessons.rs
//!
//! Axum handlers for the lesson CRUD endpoints and the master definition
//! for the OpenAPI specification.
//!
//! Handlers orchestrate only: untrusted payloads go through the core
//! normalizer, and all persistence goes through the `CatalogStore` port as a
//! load, edit-in-memory, replace sequence. That sequence is not atomic as a
//! unit; concurrent writers race and the last replace wins (see the store
//! tests).

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};
use utoipa::{OpenApi, ToSchema};

use crate::web::protocol::{
    failure, ApiFailure, ApiJson, ApiPath, ErrorBody, LessonResponse, SuccessResponse,
    UploadResponse,
};
use crate::web::state::AppState;
use study_portal_core::catalog;
use study_portal_core::domain::{Lesson, LessonDraft};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        list_lessons_handler,
        upsert_lesson_handler,
        delete_lesson_handler,
        crate::web::upload::upload_handler,
        crate::web::auth::login_handler,
        crate::web::auth::logout_handler,
    ),
    components(
        schemas(
            ErrorBody,
            SuccessResponse,
            LessonResponse,
            UploadResponse,
            UpsertLessonRequest,
            crate::web::auth::LoginRequest
        )
    ),
    tags(
        (name = "Study Portal API", description = "Lesson catalog and media upload endpoints.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Request Structs
//=========================================================================================

/// The payload for creating or updating a lesson. Every field is optional;
/// the core normalizer fills in the defaults. The id may be sent as a number
/// or a numeric string.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertLessonRequest {
    #[serde(default, deserialize_with = "study_portal_core::domain::lenient_id")]
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub media_file: Option<String>,
    pub resource_link: Option<String>,
    pub tasks: Option<String>,
}

impl From<UpsertLessonRequest> for LessonDraft {
    fn from(req: UpsertLessonRequest) -> Self {
        LessonDraft {
            id: req.id,
            title: req.title,
            description: req.description,
            media_file: req.media_file,
            resource_link: req.resource_link,
            tasks: req.tasks,
        }
    }
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// GET /api/lessons - List the full catalog
///
/// Requires no authorization and never fails: unreadable or corrupt persisted
/// state is served as an empty array.
#[utoipa::path(
    get,
    path = "/api/lessons",
    responses(
        (status = 200, description = "The full lesson catalog as a JSON array")
    )
)]
pub async fn list_lessons_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Lesson>> {
    Json(state.catalog.load().await)
}

/// POST /api/lessons - Create or update a lesson
///
/// A payload carrying the id of an existing record replaces it in place;
/// otherwise the normalized record is appended with a timestamp id.
#[utoipa::path(
    post,
    path = "/api/lessons",
    request_body = UpsertLessonRequest,
    responses(
        (status = 200, description = "The normalized, stored lesson", body = LessonResponse),
        (status = 400, description = "Title missing or blank", body = ErrorBody),
        (status = 401, description = "Not authenticated", body = ErrorBody)
    )
)]
pub async fn upsert_lesson_handler(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<UpsertLessonRequest>,
) -> Result<impl IntoResponse, ApiFailure> {
    let lesson = catalog::normalize(req.into(), Utc::now().timestamp_millis())
        .map_err(|e| failure(StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut lessons = state.catalog.load().await;
    catalog::upsert(&mut lessons, lesson.clone());
    state.catalog.replace(&lessons).await.map_err(|e| {
        error!("Failed to persist catalog: {}", e);
        failure(StatusCode::BAD_REQUEST, e.to_string())
    })?;

    info!(lesson_id = lesson.id, "Lesson upserted");
    Ok(Json(LessonResponse {
        success: true,
        lesson,
    }))
}

/// DELETE /api/lessons/{id} - Remove a lesson by id
///
/// Idempotent: deleting an id that is not in the catalog still succeeds.
#[utoipa::path(
    delete,
    path = "/api/lessons/{id}",
    params(
        ("id" = i64, Path, description = "The id of the lesson to remove")
    ),
    responses(
        (status = 200, description = "Lesson removed (or was already absent)", body = SuccessResponse),
        (status = 401, description = "Not authenticated", body = ErrorBody)
    )
)]
pub async fn delete_lesson_handler(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiFailure> {
    let mut lessons = state.catalog.load().await;
    catalog::remove(&mut lessons, id);
    state.catalog.replace(&lessons).await.map_err(|e| {
        error!("Failed to persist catalog: {}", e);
        failure(StatusCode::BAD_REQUEST, e.to_string())
    })?;

    info!(lesson_id = id, "Lesson deleted");
    Ok(Json(SuccessResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_request_maps_onto_the_core_draft() {
        let req: UpsertLessonRequest = serde_json::from_value(serde_json::json!({
            "id": "7",
            "title": "Intro",
            "mediaFile": "clip_1.mp3",
            "resourceLink": "https://example.com"
        }))
        .unwrap();

        let draft: LessonDraft = req.into();
        assert_eq!(draft.id, Some(7));
        assert_eq!(draft.title.as_deref(), Some("Intro"));
        assert_eq!(draft.media_file.as_deref(), Some("clip_1.mp3"));
        assert_eq!(draft.resource_link.as_deref(), Some("https://example.com"));
        assert_eq!(draft.description, None);
        assert_eq!(draft.tasks, None);
    }
}
