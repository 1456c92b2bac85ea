use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{DocumentRepository, FileStore, FileStoreError, RepositoryError};
use crate::presentation::config::{StorageProvider, StorageSettings};

use super::in_memory_document_repository::InMemoryDocumentRepository;
use super::json_document_repository::JsonDocumentRepository;
use super::object_file_store::ObjectFileStore;

pub const METADATA_FILE: &str = "metadata.json";

#[derive(Debug, thiserror::Error)]
pub enum StorageFactoryError {
    #[error("document repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("file store: {0}")]
    FileStore(#[from] FileStoreError),
}

pub struct Storage {
    pub documents: Arc<dyn DocumentRepository>,
    pub files: Arc<dyn FileStore>,
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(settings: &StorageSettings) -> Result<Storage, StorageFactoryError> {
        match settings.provider {
            StorageProvider::Local => {
                let data_dir = PathBuf::from(&settings.data_dir);
                let files = ObjectFileStore::local(data_dir.clone())?;
                let documents = JsonDocumentRepository::open(data_dir.join(METADATA_FILE)).await?;
                tracing::info!(data_dir = %data_dir.display(), "Using local storage");
                Ok(Storage {
                    documents: Arc::new(documents),
                    files: Arc::new(files),
                })
            }
            StorageProvider::Memory => {
                tracing::info!("Using in-memory storage, uploads are lost on restart");
                Ok(Storage {
                    documents: Arc::new(InMemoryDocumentRepository::new()),
                    files: Arc::new(ObjectFileStore::in_memory()),
                })
            }
        }
    }
}
