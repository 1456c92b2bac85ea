use std::time::Duration;

use docstudy::application::ports::{DocumentRepository, RepositoryError};
use docstudy::domain::{ContentType, Document};
use docstudy::infrastructure::storage::JsonDocumentRepository;

fn document(name: &str) -> Document {
    Document::new(
        name.to_string(),
        ContentType::Pdf,
        2048,
        format!("Extracted text of {}", name),
        3,
    )
}

#[tokio::test]
async fn given_saved_document_when_reopening_then_it_is_loaded_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metadata.json");
    let saved = document("lecture.pdf");

    {
        let repository = JsonDocumentRepository::open(&path).await.unwrap();
        repository.save(&saved).await.unwrap();
    }

    let reopened = JsonDocumentRepository::open(&path).await.unwrap();
    let loaded = reopened.get(saved.id).await.unwrap().unwrap();

    assert_eq!(loaded.filename, "lecture.pdf");
    assert_eq!(loaded.content_type, ContentType::Pdf);
    assert_eq!(loaded.page_count, 3);
    assert_eq!(loaded.raw_text, saved.raw_text);
    assert_eq!(loaded.uploaded_at, saved.uploaded_at);
}

#[tokio::test]
async fn given_missing_file_when_opening_then_repository_starts_empty_in_new_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("metadata.json");

    let repository = JsonDocumentRepository::open(&path).await.unwrap();

    assert!(repository.list().await.unwrap().is_empty());
    assert!(path.parent().unwrap().exists());
}

#[tokio::test]
async fn given_deleted_document_when_reopening_then_it_stays_deleted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metadata.json");
    let repository = JsonDocumentRepository::open(&path).await.unwrap();
    let kept = document("kept.pdf");
    let removed = document("removed.pdf");
    repository.save(&kept).await.unwrap();
    repository.save(&removed).await.unwrap();

    assert!(repository.delete(removed.id).await.unwrap());
    assert!(!repository.delete(removed.id).await.unwrap());

    let reopened = JsonDocumentRepository::open(&path).await.unwrap();
    let ids: Vec<_> = reopened.list().await.unwrap().iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![kept.id]);
}

#[tokio::test]
async fn given_documents_saved_over_time_when_listing_then_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let repository = JsonDocumentRepository::open(dir.path().join("metadata.json"))
        .await
        .unwrap();
    let first = document("first.pdf");
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second = document("second.pdf");
    repository.save(&first).await.unwrap();
    repository.save(&second).await.unwrap();

    let names: Vec<String> = repository
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.filename)
        .collect();

    assert_eq!(names, vec!["second.pdf", "first.pdf"]);
}

#[tokio::test]
async fn given_corrupt_index_when_opening_then_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metadata.json");
    tokio::fs::write(&path, b"{ not json").await.unwrap();

    let result = JsonDocumentRepository::open(&path).await;

    assert!(matches!(result, Err(RepositoryError::Serialization(_))));
}

#[tokio::test]
async fn given_blank_index_file_when_opening_then_treated_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metadata.json");
    tokio::fs::write(&path, b"\n").await.unwrap();

    let repository = JsonDocumentRepository::open(&path).await.unwrap();

    assert!(repository.list().await.unwrap().is_empty());
}
