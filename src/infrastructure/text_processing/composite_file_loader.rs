use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ExtractedText, FileLoader, FileLoaderError};
use crate::domain::ContentType;

use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;

pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// PDF and plain text, the formats accepted for upload.
    pub fn with_default_adapters() -> Self {
        Self::new(vec![
            (ContentType::Pdf, Arc::new(PdfAdapter::new())),
            (ContentType::Text, Arc::new(PlainTextAdapter)),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract(
        &self,
        data: &[u8],
        content_type: ContentType,
    ) -> Result<ExtractedText, FileLoaderError> {
        let adapter = self.adapters.get(&content_type).ok_or_else(|| {
            FileLoaderError::UnsupportedContentType(content_type.as_mime().to_string())
        })?;

        adapter.extract(data, content_type).await
    }
}
