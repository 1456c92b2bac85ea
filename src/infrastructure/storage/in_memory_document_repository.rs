use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{DocumentRepository, RepositoryError};
use crate::domain::{Document, DocumentId};

use super::json_document_repository::newest_first;

#[derive(Default)]
pub struct InMemoryDocumentRepository {
    documents: RwLock<HashMap<DocumentId, Document>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn save(&self, document: &Document) -> Result<(), RepositoryError> {
        self.documents
            .write()
            .await
            .insert(document.id, document.clone());
        Ok(())
    }

    async fn get(&self, id: DocumentId) -> Result<Option<Document>, RepositoryError> {
        Ok(self.documents.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Document>, RepositoryError> {
        Ok(newest_first(self.documents.read().await.values().cloned()))
    }

    async fn delete(&self, id: DocumentId) -> Result<bool, RepositoryError> {
        Ok(self.documents.write().await.remove(&id).is_some())
    }
}
