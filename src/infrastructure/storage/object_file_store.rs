use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{FileStore, FileStoreError};
use crate::domain::StoragePath;

/// Uploaded originals and generated audio, behind any `object_store` backend.
pub struct ObjectFileStore {
    inner: Arc<dyn ObjectStore>,
}

impl ObjectFileStore {
    pub fn local(base_path: PathBuf) -> Result<Self, FileStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| FileStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(InMemory::new()),
        }
    }
}

fn not_found_or(error: object_store::Error, other: fn(String) -> FileStoreError) -> FileStoreError {
    match error {
        object_store::Error::NotFound { path, .. } => FileStoreError::NotFound(path),
        e => other(e.to_string()),
    }
}

#[async_trait::async_trait]
impl FileStore for ObjectFileStore {
    async fn put(&self, path: &StoragePath, data: Bytes) -> Result<u64, FileStoreError> {
        let store_path = StorePath::from(path.as_str());
        let size = data.len() as u64;

        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| FileStoreError::UploadFailed(e.to_string()))?;

        tracing::debug!(path = %path, size_bytes = size, "Stored file");
        Ok(size)
    }

    async fn get(&self, path: &StoragePath) -> Result<Bytes, FileStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = self
            .inner
            .get(&store_path)
            .await
            .map_err(|e| not_found_or(e, FileStoreError::DownloadFailed))?;

        result
            .bytes()
            .await
            .map_err(|e| FileStoreError::DownloadFailed(e.to_string()))
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), FileStoreError> {
        let store_path = StorePath::from(path.as_str());
        self.inner
            .delete(&store_path)
            .await
            .map_err(|e| not_found_or(e, FileStoreError::DeleteFailed))
    }
}
