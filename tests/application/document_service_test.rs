use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use docstudy::application::ports::{DocumentRepository, FileLoaderError, FileStore, RepositoryError};
use docstudy::application::services::{DocumentError, DocumentService};
use docstudy::domain::{ContentType, Document, DocumentId, StoragePath};
use docstudy::infrastructure::storage::{InMemoryDocumentRepository, ObjectFileStore};
use docstudy::infrastructure::text_processing::CompositeFileLoader;

// Reads and writes work; deletes fail like a read-only metadata directory.
struct UndeletableRepository(InMemoryDocumentRepository);

#[async_trait]
impl DocumentRepository for UndeletableRepository {
    async fn save(&self, document: &Document) -> Result<(), RepositoryError> {
        self.0.save(document).await
    }

    async fn get(&self, id: DocumentId) -> Result<Option<Document>, RepositoryError> {
        self.0.get(id).await
    }

    async fn list(&self) -> Result<Vec<Document>, RepositoryError> {
        self.0.list().await
    }

    async fn delete(&self, _id: DocumentId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only metadata directory",
        )))
    }
}

fn service(max_upload_bytes: u64) -> DocumentService {
    DocumentService::new(
        Arc::new(InMemoryDocumentRepository::new()),
        Arc::new(ObjectFileStore::in_memory()),
        Arc::new(CompositeFileLoader::with_default_adapters()),
        max_upload_bytes,
    )
}

#[tokio::test]
async fn given_text_file_when_uploading_then_document_is_stored_with_extracted_text() {
    let service = service(1024);
    let data = Bytes::from_static(b"Cells divide by mitosis.\n\n\nThey also  grow.");

    let document = service
        .upload(data.clone(), "biology.txt".to_string(), ContentType::Text)
        .await
        .unwrap();

    assert_eq!(document.filename, "biology.txt");
    assert_eq!(document.size_bytes, data.len() as u64);
    assert_eq!(document.page_count, 1);
    assert_eq!(document.raw_text, "Cells divide by mitosis.\n\nThey also grow.");

    let (stored, original) = service.original_bytes(document.id).await.unwrap();
    assert_eq!(stored.id, document.id);
    assert_eq!(original, data);
}

#[tokio::test]
async fn given_empty_file_when_uploading_then_rejected() {
    let result = service(1024)
        .upload(Bytes::new(), "empty.txt".to_string(), ContentType::Text)
        .await;

    assert!(matches!(result, Err(DocumentError::EmptyFile)));
}

#[tokio::test]
async fn given_file_over_limit_when_uploading_then_too_large() {
    let result = service(10)
        .upload(
            Bytes::from_static(b"eleven bytes"),
            "big.txt".to_string(),
            ContentType::Text,
        )
        .await;

    assert!(matches!(
        result,
        Err(DocumentError::TooLarge {
            size: 12,
            limit: 10
        })
    ));
}

#[tokio::test]
async fn given_unreadable_file_when_uploading_then_extraction_fails_and_nothing_is_listed() {
    let service = service(1024);

    let result = service
        .upload(
            Bytes::from_static(&[0xff, 0xfe, 0x00, 0x9f]),
            "binary.txt".to_string(),
            ContentType::Text,
        )
        .await;

    assert!(matches!(
        result,
        Err(DocumentError::Extraction(FileLoaderError::ExtractionFailed(_)))
    ));
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_two_uploads_when_listing_then_newest_first() {
    let service = service(1024);
    let older = service
        .upload(Bytes::from_static(b"first"), "a.txt".to_string(), ContentType::Text)
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let newer = service
        .upload(Bytes::from_static(b"second"), "b.txt".to_string(), ContentType::Text)
        .await
        .unwrap();

    let listed = service.list().await.unwrap();

    let ids: Vec<_> = listed.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
}

#[tokio::test]
async fn given_uploaded_document_when_deleting_then_record_and_file_are_gone() {
    let service = service(1024);
    let document = service
        .upload(Bytes::from_static(b"content"), "c.txt".to_string(), ContentType::Text)
        .await
        .unwrap();

    service.delete(document.id).await.unwrap();

    assert!(matches!(
        service.get(document.id).await,
        Err(DocumentError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(document.id).await,
        Err(DocumentError::NotFound(_))
    ));
}

#[tokio::test]
async fn given_repository_delete_fails_when_deleting_then_document_and_file_survive() {
    let files = Arc::new(ObjectFileStore::in_memory());
    let service = DocumentService::new(
        Arc::new(UndeletableRepository(InMemoryDocumentRepository::new())),
        files.clone(),
        Arc::new(CompositeFileLoader::with_default_adapters()),
        1024,
    );
    let data = Bytes::from_static(b"content that must stay downloadable");
    let document = service
        .upload(data.clone(), "keep.txt".to_string(), ContentType::Text)
        .await
        .unwrap();

    let result = service.delete(document.id).await;

    assert!(matches!(result, Err(DocumentError::Repository(_))));
    let path = StoragePath::for_document(&document.id, ContentType::Text);
    assert_eq!(files.get(&path).await.unwrap(), data);
    let (_, original) = service.original_bytes(document.id).await.unwrap();
    assert_eq!(original, data);
}
