//! crates/study_portal_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of how the catalog and media bytes are persisted.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::Lesson;

/// A generic error type for all port operations.
/// This abstracts away the specific errors from the storage backends.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

/// Owns the persisted lesson catalog.
///
/// `load` is deliberately fail-open: corrupt or missing state comes back as
/// an empty catalog, never an error. `replace` overwrites the whole catalog;
/// the load/replace pair is not atomic as a unit, so two concurrent writers
/// race and the last `replace` wins.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn load(&self) -> Vec<Lesson>;
    async fn replace(&self, catalog: &[Lesson]) -> PortResult<()>;
}

/// Writes uploaded media bytes under their generated stored name.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn store(&self, file_name: &str, data: Bytes) -> PortResult<()>;
}
