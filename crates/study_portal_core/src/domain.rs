//! crates/study_portal_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! The `Lesson` struct doubles as the wire and persistence format, so the
//! serde derives (with the portal's camelCase field names) live here.

use serde::{Deserialize, Deserializer, Serialize};

/// An error produced while validating untrusted input, whether a lesson
/// payload or an uploaded media file name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Unsupported file type. Use mp4/m4a/mp4a/mp3/wav/webm/ogg.")]
    UnsupportedMediaType,
}

/// A single catalog entry describing a study unit.
///
/// Every textual field is always present in serialized form, though possibly
/// empty; `title` is guaranteed non-empty for any stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub media_file: String,
    pub resource_link: String,
    pub tasks: String,
}

/// An untrusted, partial lesson payload as submitted by the admin UI.
///
/// Every field is optional; normalization fills in the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDraft {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub media_file: Option<String>,
    pub resource_link: Option<String>,
    pub tasks: Option<String>,
}

/// Deserializes a lesson id that may arrive as a JSON number or a numeric
/// string. Unparseable strings mean "no id supplied", so such payloads mint a
/// fresh id instead of failing.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdValue {
        Number(i64),
        Text(String),
    }

    Ok(match Option::<IdValue>::deserialize(deserializer)? {
        None => None,
        Some(IdValue::Number(n)) => Some(n),
        Some(IdValue::Text(s)) => s.trim().parse().ok(),
    })
}

/// The identity of an uploaded media asset: the generated on-disk name plus
/// the name the client originally sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMedia {
    pub file_name: String,
    pub original_name: String,
}
