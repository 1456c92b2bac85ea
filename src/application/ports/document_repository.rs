use async_trait::async_trait;

use crate::domain::{Document, DocumentId};

use super::RepositoryError;

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn save(&self, document: &Document) -> Result<(), RepositoryError>;

    async fn get(&self, id: DocumentId) -> Result<Option<Document>, RepositoryError>;

    /// Newest first.
    async fn list(&self) -> Result<Vec<Document>, RepositoryError>;

    /// Returns whether a document was removed.
    async fn delete(&self, id: DocumentId) -> Result<bool, RepositoryError>;
}
