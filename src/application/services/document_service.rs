use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    DocumentRepository, FileLoader, FileLoaderError, FileStore, FileStoreError, RepositoryError,
};
use crate::domain::{ContentType, Document, DocumentId, StoragePath};

pub struct DocumentService {
    repository: Arc<dyn DocumentRepository>,
    files: Arc<dyn FileStore>,
    file_loader: Arc<dyn FileLoader>,
    max_upload_bytes: u64,
}

impl DocumentService {
    pub fn new(
        repository: Arc<dyn DocumentRepository>,
        files: Arc<dyn FileStore>,
        file_loader: Arc<dyn FileLoader>,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            repository,
            files,
            file_loader,
            max_upload_bytes,
        }
    }

    /// Extracts text first so nothing is stored for a file that cannot be read.
    pub async fn upload(
        &self,
        data: Bytes,
        filename: String,
        content_type: ContentType,
    ) -> Result<Document, DocumentError> {
        if data.is_empty() {
            return Err(DocumentError::EmptyFile);
        }
        let size = data.len() as u64;
        if size > self.max_upload_bytes {
            return Err(DocumentError::TooLarge {
                size,
                limit: self.max_upload_bytes,
            });
        }

        let extracted = self.file_loader.extract(&data, content_type).await?;
        let document = Document::new(
            filename,
            content_type,
            size,
            extracted.text,
            extracted.page_count,
        );

        let path = StoragePath::for_document(&document.id, content_type);
        self.files.put(&path, data).await?;

        if let Err(e) = self.repository.save(&document).await {
            if let Err(cleanup) = self.files.delete(&path).await {
                tracing::warn!(path = %path, error = %cleanup, "Failed to remove orphaned upload");
            }
            return Err(e.into());
        }

        tracing::info!(
            document_id = %document.id,
            filename = %document.filename,
            size_bytes = document.size_bytes,
            text_length = document.text_length(),
            page_count = document.page_count,
            "Document uploaded"
        );
        Ok(document)
    }

    pub async fn get(&self, id: DocumentId) -> Result<Document, DocumentError> {
        self.repository
            .get(id)
            .await?
            .ok_or(DocumentError::NotFound(id))
    }

    pub async fn list(&self) -> Result<Vec<Document>, DocumentError> {
        Ok(self.repository.list().await?)
    }

    /// Removes the record first so a failed delete never leaves a record
    /// pointing at a missing file. The original file is then removed best
    /// effort; a leftover file is only logged.
    pub async fn delete(&self, id: DocumentId) -> Result<(), DocumentError> {
        let document = self.get(id).await?;

        if !self.repository.delete(id).await? {
            return Err(DocumentError::NotFound(id));
        }

        let path = StoragePath::for_document(&document.id, document.content_type);
        match self.files.delete(&path).await {
            Ok(()) | Err(FileStoreError::NotFound(_)) => {}
            Err(e) => tracing::warn!(path = %path, error = %e, "Failed to delete original file"),
        }

        tracing::info!(document_id = %id, "Document deleted");
        Ok(())
    }

    pub async fn original_bytes(&self, id: DocumentId) -> Result<(Document, Bytes), DocumentError> {
        let document = self.get(id).await?;
        let path = StoragePath::for_document(&document.id, document.content_type);
        let data = self.files.get(&path).await?;
        Ok((document, data))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("uploaded file is empty")]
    EmptyFile,
    #[error("file of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },
    #[error("document not found: {0}")]
    NotFound(DocumentId),
    #[error("text extraction: {0}")]
    Extraction(#[from] FileLoaderError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("file store: {0}")]
    FileStore(#[from] FileStoreError),
}
