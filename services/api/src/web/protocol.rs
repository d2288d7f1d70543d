//! services/api/src/web/protocol.rs
//!
//! The JSON response shapes shared across the REST handlers, plus extractor
//! wrappers that keep every user-facing failure in the same
//! `{"error": "<message>"}` shape — axum's stock `Json` and `Path` rejections
//! would otherwise answer with plain-text bodies.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use study_portal_core::domain::Lesson;
use utoipa::ToSchema;

/// The body of every user-facing failure: `{"error": "<message>"}`.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// The failure type returned by all REST handlers.
pub type ApiFailure = (StatusCode, Json<ErrorBody>);

/// Builds the standard JSON failure response.
pub fn failure(status: StatusCode, message: impl Into<String>) -> ApiFailure {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

/// A `Json` body extractor whose rejection is the standard JSON failure.
///
/// Malformed bodies (bad syntax, wrong content type, over-limit) become a
/// 400 with an `ErrorBody` carrying axum's rejection message.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiFailure;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(failure(StatusCode::BAD_REQUEST, rejection.body_text())),
        }
    }
}

/// A `Path` extractor whose rejection is the standard JSON failure.
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiFailure;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(failure(StatusCode::BAD_REQUEST, rejection.body_text())),
        }
    }
}

/// `{"success": true}` — returned by login, logout, and delete.
#[derive(Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// The response to a successful lesson upsert.
#[derive(Serialize, ToSchema)]
pub struct LessonResponse {
    pub success: bool,
    /// The core `Lesson` type carries no schema derive, so it is documented
    /// as a plain object.
    #[schema(value_type = Object)]
    pub lesson: Lesson,
}

/// The response to a successful media upload.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub file_name: String,
    pub original_name: String,
}
