use async_trait::async_trait;

use crate::application::ports::{ExtractedText, FileLoader, FileLoaderError};
use crate::domain::ContentType;

use super::text_sanitizer::sanitize_extracted_text;

/// UTF-8 text files count as a single page.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract(
        &self,
        data: &[u8],
        content_type: ContentType,
    ) -> Result<ExtractedText, FileLoaderError> {
        if content_type != ContentType::Text {
            return Err(FileLoaderError::UnsupportedContentType(
                content_type.as_mime().to_string(),
            ));
        }

        let raw = std::str::from_utf8(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?;

        Ok(ExtractedText {
            text: sanitize_extracted_text(raw.trim_start_matches('\u{feff}')),
            page_count: 1,
        })
    }
}
