use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document as PdfDocument;

use crate::application::ports::{ExtractedText, FileLoader, FileLoaderError};
use crate::domain::ContentType;

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Pages that fail to decode are skipped; the page count still covers them.
    fn extract_pages(data: &[u8]) -> Result<(Vec<String>, u32), FileLoaderError> {
        let document = PdfDocument::load_mem(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        let page_count = page_numbers.len() as u32;

        let mut pages = Vec::with_capacity(page_numbers.len());
        for page_number in page_numbers {
            match document.extract_text(&[page_number]) {
                Ok(text) if !text.trim().is_empty() => pages.push(text),
                Ok(_) => {}
                Err(e) => tracing::debug!(page_number, error = %e, "Skipping unreadable PDF page"),
            }
        }

        Ok((pages, page_count))
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(size_bytes = data.len()))]
    async fn extract(
        &self,
        data: &[u8],
        content_type: ContentType,
    ) -> Result<ExtractedText, FileLoaderError> {
        if content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                content_type.as_mime().to_string(),
            ));
        }

        let owned = data.to_vec();
        let (pages, page_count) = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&owned)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        let text = pages
            .iter()
            .map(|page| sanitize_extracted_text(page))
            .filter(|page| !page.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        // Scanned PDFs carry no text layer; they are stored with empty text
        // and rejected later by content checks.
        if text.is_empty() {
            tracing::warn!(page_count, "PDF has no extractable text");
        } else {
            tracing::info!(page_count, text_length = text.len(), "PDF text extraction complete");
        }

        Ok(ExtractedText { text, page_count })
    }
}
