use async_trait::async_trait;

use crate::domain::ContentType;

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: u32,
}

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract(
        &self,
        data: &[u8],
        content_type: ContentType,
    ) -> Result<ExtractedText, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
