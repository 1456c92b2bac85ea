use crate::application::ports::{DocumentRepository, FileStoreError, RepositoryError};
use crate::domain::{Document, DocumentId};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("document not found: {0}")]
    DocumentNotFound(DocumentId),
    #[error("document has {actual} characters of text, at least {required} required")]
    InsufficientContent { required: usize, actual: usize },
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("file store: {0}")]
    FileStore(#[from] FileStoreError),
}

pub(crate) async fn load_document(
    repository: &dyn DocumentRepository,
    id: DocumentId,
) -> Result<Document, ContentError> {
    repository
        .get(id)
        .await?
        .ok_or(ContentError::DocumentNotFound(id))
}

pub(crate) fn require_min_content(
    document: &Document,
    min_chars: usize,
) -> Result<(), ContentError> {
    if document.has_min_content(min_chars) {
        return Ok(());
    }

    Err(ContentError::InsufficientContent {
        required: min_chars,
        actual: document.raw_text.trim().chars().count(),
    })
}
