#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization: {0}")]
    Serialization(String),
    #[error("corrupt record: {0}")]
    CorruptRecord(String),
}
