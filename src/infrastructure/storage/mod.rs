mod document_record;
mod in_memory_document_repository;
mod json_document_repository;
mod object_file_store;
mod storage_factory;

pub use in_memory_document_repository::InMemoryDocumentRepository;
pub use json_document_repository::JsonDocumentRepository;
pub use object_file_store::ObjectFileStore;
pub use storage_factory::{METADATA_FILE, Storage, StorageFactory, StorageFactoryError};
