mod document_repository;
mod file_loader;
mod file_store;
mod keyword_extractor;
mod llm_client;
mod repository_error;
mod speech_synthesizer;

pub use document_repository::DocumentRepository;
pub use file_loader::{ExtractedText, FileLoader, FileLoaderError};
pub use file_store::{FileStore, FileStoreError};
pub use keyword_extractor::{
    Category, Concept, Emotion, Keyword, KeywordExtractor, KeywordExtractorError, Sentiment,
    TextAnalysis,
};
pub use llm_client::{GenerationParams, LlmClient, LlmClientError};
pub use repository_error::RepositoryError;
pub use speech_synthesizer::{AudioFormat, SpeechSynthesisError, SpeechSynthesizer};
