use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::RepositoryError;
use crate::domain::{ContentType, Document, DocumentId};

/// On-disk shape of a [`Document`] in the metadata index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DocumentRecord {
    id: Uuid,
    filename: String,
    content_type: String,
    size_bytes: u64,
    text: String,
    page_count: u32,
    uploaded_at: DateTime<Utc>,
}

impl From<&Document> for DocumentRecord {
    fn from(document: &Document) -> Self {
        Self {
            id: document.id.as_uuid(),
            filename: document.filename.clone(),
            content_type: document.content_type.as_mime().to_string(),
            size_bytes: document.size_bytes,
            text: document.raw_text.clone(),
            page_count: document.page_count,
            uploaded_at: document.uploaded_at,
        }
    }
}

impl TryFrom<DocumentRecord> for Document {
    type Error = RepositoryError;

    fn try_from(record: DocumentRecord) -> Result<Self, Self::Error> {
        let content_type = ContentType::from_mime(&record.content_type).ok_or_else(|| {
            RepositoryError::CorruptRecord(format!(
                "document {} has unknown content type {}",
                record.id, record.content_type
            ))
        })?;

        Ok(Document {
            id: DocumentId::from_uuid(record.id),
            filename: record.filename,
            content_type,
            size_bytes: record.size_bytes,
            raw_text: record.text,
            page_count: record.page_count,
            uploaded_at: record.uploaded_at,
        })
    }
}
