//! crates/study_portal_core/src/media.rs
//!
//! Media admissibility and stored-name generation. Files are judged by
//! extension alone (case-insensitive) against a fixed audio/video allow-list;
//! the actual byte transfer is the `MediaStore` port's business.

use crate::domain::DomainError;

/// Extensions (without the dot) that may be uploaded.
const ALLOWED_EXTENSIONS: &[&str] = &["mp4", "m4a", "mp4a", "mp3", "wav", "webm", "ogg"];

/// Longest sanitized base name kept when generating a stored name.
const MAX_BASE_LEN: usize = 60;

/// Splits a file name into its base and extension (extension lowercased,
/// with the leading dot, empty when there is none).
fn split_name(file_name: &str) -> (&str, String) {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => (&file_name[..idx], file_name[idx..].to_lowercase()),
        _ => (file_name, String::new()),
    }
}

/// Returns true when the file name carries one of the allowed extensions.
pub fn is_allowed(file_name: &str) -> bool {
    let (_, ext) = split_name(file_name);
    ext.strip_prefix('.')
        .map(|e| ALLOWED_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

/// Generates the on-disk name for an admissible upload.
///
/// The base name is reduced to alphanumerics, dashes and underscores (runs of
/// anything else collapse to a single underscore) and capped at 60
/// characters, then suffixed with `now_ms` for uniqueness and the original
/// lowercased extension (`.bin` when the name had none).
///
/// Fails with `UnsupportedMediaType` before any name is produced when the
/// extension is not on the allow-list.
pub fn stored_name(original_name: &str, now_ms: i64) -> Result<String, DomainError> {
    if !is_allowed(original_name) {
        return Err(DomainError::UnsupportedMediaType);
    }

    let (base, ext) = split_name(original_name);
    let base = if base.is_empty() { "media" } else { base };
    let ext = if ext.is_empty() { ".bin".to_string() } else { ext };

    let mut sanitized = String::with_capacity(base.len());
    let mut last_was_replacement = false;
    for c in base.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            sanitized.push(c);
            last_was_replacement = false;
        } else if !last_was_replacement {
            sanitized.push('_');
            last_was_replacement = true;
        }
    }
    sanitized.truncate(MAX_BASE_LEN);

    Ok(format!("{}_{}{}", sanitized, now_ms, ext))
}
