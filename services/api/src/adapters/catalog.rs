//! services/api/src/adapters/catalog.rs
//!
//! This module contains the catalog adapter, the concrete implementation of
//! the `CatalogStore` port from the `core` crate. The whole catalog lives in
//! a single pretty-printed JSON file which is read in full on every load and
//! overwritten in full on every replace.

use async_trait::async_trait;
use std::path::PathBuf;
use study_portal_core::domain::Lesson;
use study_portal_core::ports::{CatalogStore, PortError, PortResult};
use tracing::warn;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A file-backed catalog adapter that implements the `CatalogStore` port.
#[derive(Clone)]
pub struct JsonCatalogStore {
    path: PathBuf,
}

impl JsonCatalogStore {
    /// Creates a new `JsonCatalogStore`, initializing the backing file to an
    /// empty array when it does not exist yet.
    pub async fn new(path: PathBuf) -> PortResult<Self> {
        if tokio::fs::try_exists(&path)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?
        {
            return Ok(Self { path });
        }
        tokio::fs::write(&path, "[]")
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(Self { path })
    }
}

//=========================================================================================
// `CatalogStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl CatalogStore for JsonCatalogStore {
    /// Fail-open load: a missing, unreadable or malformed file yields the
    /// empty catalog. Corrupt state is logged, never surfaced to the caller.
    async fn load(&self) -> Vec<Lesson> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Catalog file unreadable, treating as empty: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Lesson>>(&raw) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Catalog file malformed, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrites the whole persisted catalog. Last caller wins; there is no
    /// locking or versioning around the load/replace pair.
    async fn replace(&self, catalog: &[Lesson]) -> PortResult<()> {
        let json = serde_json::to_string_pretty(catalog)
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(())
    }
}
