//! crates/study_portal_core/src/catalog.rs
//!
//! Pure catalog logic: turning an untrusted lesson payload into a well-formed
//! record, and applying upsert/remove edits to an in-memory catalog. All disk
//! I/O lives behind the `CatalogStore` port; nothing here touches a file.

use crate::domain::{DomainError, Lesson, LessonDraft};

/// Converts an untrusted draft into a normalized `Lesson`.
///
/// The trimmed title must be non-empty. A supplied non-zero id is kept so the
/// caller can update an existing record; otherwise `now_ms` (the current Unix
/// timestamp in milliseconds) becomes the new id. Two creations in the same
/// millisecond would collide; that window is accepted for a single-admin
/// portal rather than papered over with extra id state.
pub fn normalize(draft: LessonDraft, now_ms: i64) -> Result<Lesson, DomainError> {
    let title = draft.title.unwrap_or_default().trim().to_string();
    if title.is_empty() {
        return Err(DomainError::TitleRequired);
    }

    let id = match draft.id {
        Some(id) if id != 0 => id,
        _ => now_ms,
    };

    Ok(Lesson {
        id,
        title,
        description: draft.description.unwrap_or_default(),
        media_file: draft.media_file.unwrap_or_default(),
        resource_link: draft.resource_link.unwrap_or_default(),
        tasks: draft.tasks.unwrap_or_default(),
    })
}

/// Inserts `lesson` into the catalog, replacing in place when a record with
/// the same id already exists and appending otherwise.
pub fn upsert(catalog: &mut Vec<Lesson>, lesson: Lesson) {
    match catalog.iter().position(|l| l.id == lesson.id) {
        Some(idx) => catalog[idx] = lesson,
        None => catalog.push(lesson),
    }
}

/// Removes every record with the given id. Defined (a no-op) when none match,
/// so callers can treat deletion as idempotent.
pub fn remove(catalog: &mut Vec<Lesson>, id: i64) {
    catalog.retain(|l| l.id != id);
}
