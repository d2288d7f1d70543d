//! services/api/src/adapters/media.rs
//!
//! Filesystem implementation of the `MediaStore` port: uploaded bytes land
//! in the configured media directory under their generated stored name.

use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;
use study_portal_core::ports::{MediaStore, PortError, PortResult};

/// A media adapter that writes files under a single directory.
#[derive(Clone)]
pub struct FsMediaStore {
    dir: PathBuf,
}

impl FsMediaStore {
    /// Creates a new `FsMediaStore`, creating the media directory if absent.
    pub async fn new(dir: PathBuf) -> PortResult<Self> {
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(Self { dir })
    }
}

#[async_trait]
impl MediaStore for FsMediaStore {
    async fn store(&self, file_name: &str, data: Bytes) -> PortResult<()> {
        tokio::fs::write(self.dir.join(file_name), data)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(())
    }
}
