//! services/api/src/web/upload.rs
//!
//! The multipart media upload endpoint. Admissibility is decided by file
//! extension alone, before any bytes are handed to the media store; the
//! 500 MiB size cap is enforced by the body limit on this route.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};

use crate::web::protocol::{failure, ApiFailure, ErrorBody, UploadResponse};
use crate::web::state::AppState;
use study_portal_core::domain::StoredMedia;
use study_portal_core::media;

/// Maximum accepted upload size: 500 MiB.
pub const MAX_UPLOAD_BYTES: usize = 500 * 1024 * 1024;

/// POST /api/upload - Store a media file
///
/// Accepts a multipart/form-data request and takes the first field that
/// carries a file name. On success the generated stored name is returned for
/// the client to reference from a lesson record; the catalog itself is not
/// touched here.
#[utoipa::path(
    post,
    path = "/api/upload",
    request_body(content_type = "multipart/form-data", description = "The media file to upload."),
    responses(
        (status = 200, description = "File stored", body = UploadResponse),
        (status = 400, description = "No file or unsupported extension", body = ErrorBody),
        (status = 401, description = "Not authenticated", body = ErrorBody)
    )
)]
pub async fn upload_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiFailure> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        failure(
            StatusCode::BAD_REQUEST,
            format!("Failed to read multipart data: {}", e),
        )
    })? {
        let Some(original_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        // Extension check happens before the field's bytes are consumed.
        let file_name = media::stored_name(&original_name, Utc::now().timestamp_millis())
            .map_err(|e| failure(StatusCode::BAD_REQUEST, e.to_string()))?;

        let data = field.bytes().await.map_err(|e| {
            failure(
                StatusCode::BAD_REQUEST,
                format!("Failed to read file bytes: {}", e),
            )
        })?;

        state.media.store(&file_name, data).await.map_err(|e| {
            error!("Failed to store uploaded file: {}", e);
            failure(StatusCode::BAD_REQUEST, e.to_string())
        })?;

        info!(%file_name, %original_name, "Media file stored");
        let stored = StoredMedia {
            file_name,
            original_name,
        };
        return Ok(Json(UploadResponse {
            success: true,
            file_name: stored.file_name,
            original_name: stored.original_name,
        }));
    }

    Err(failure(StatusCode::BAD_REQUEST, "No file uploaded"))
}
