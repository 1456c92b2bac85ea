use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{DocumentRepository, RepositoryError};
use crate::domain::{Document, DocumentId};

use super::document_record::DocumentRecord;

/// Document metadata and extracted text kept in one JSON file.
///
/// The whole index is held in memory and the file is rewritten on every
/// change, through a temporary file and a rename so a crash never leaves a
/// half-written index behind. Writers hold the lock across the rewrite.
pub struct JsonDocumentRepository {
    path: PathBuf,
    documents: RwLock<HashMap<DocumentId, Document>>,
}

impl JsonDocumentRepository {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let documents = match tokio::fs::read(&path).await {
            Ok(raw) => parse_index(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            path = %path.display(),
            documents = documents.len(),
            "Document index loaded"
        );
        Ok(Self {
            path,
            documents: RwLock::new(documents),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(
        &self,
        documents: &HashMap<DocumentId, Document>,
    ) -> Result<(), RepositoryError> {
        let records: Vec<DocumentRecord> = newest_first(documents.values().cloned())
            .iter()
            .map(DocumentRecord::from)
            .collect();

        let json = serde_json::to_vec_pretty(&records)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, json).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

fn parse_index(raw: &[u8]) -> Result<HashMap<DocumentId, Document>, RepositoryError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(HashMap::new());
    }

    let records: Vec<DocumentRecord> =
        serde_json::from_slice(raw).map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    records
        .into_iter()
        .map(|record| Document::try_from(record).map(|doc| (doc.id, doc)))
        .collect()
}

pub(super) fn newest_first(documents: impl Iterator<Item = Document>) -> Vec<Document> {
    let mut documents: Vec<Document> = documents.collect();
    documents.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at).then(a.id.cmp(&b.id)));
    documents
}

#[async_trait]
impl DocumentRepository for JsonDocumentRepository {
    async fn save(&self, document: &Document) -> Result<(), RepositoryError> {
        let mut documents = self.documents.write().await;
        let previous = documents.insert(document.id, document.clone());

        if let Err(e) = self.persist(&documents).await {
            match previous {
                Some(previous) => documents.insert(document.id, previous),
                None => documents.remove(&document.id),
            };
            return Err(e);
        }
        Ok(())
    }

    async fn get(&self, id: DocumentId) -> Result<Option<Document>, RepositoryError> {
        Ok(self.documents.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Document>, RepositoryError> {
        let documents = self.documents.read().await;
        Ok(newest_first(documents.values().cloned()))
    }

    async fn delete(&self, id: DocumentId) -> Result<bool, RepositoryError> {
        let mut documents = self.documents.write().await;
        let Some(removed) = documents.remove(&id) else {
            return Ok(false);
        };

        if let Err(e) = self.persist(&documents).await {
            documents.insert(id, removed);
            return Err(e);
        }
        Ok(true)
    }
}
