use docstudy::application::ports::{FileLoader, FileLoaderError};
use docstudy::domain::ContentType;
use docstudy::infrastructure::text_processing::PdfAdapter;

#[tokio::test]
async fn given_bytes_that_are_not_a_pdf_when_extracting_then_extraction_failed() {
    let result = PdfAdapter::new()
        .extract(b"definitely not a pdf", ContentType::Pdf)
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_text_content_type_when_extracting_then_unsupported() {
    let result = PdfAdapter::new().extract(b"hello", ContentType::Text).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
