use docstudy::application::ports::{FileLoader, FileLoaderError};
use docstudy::domain::ContentType;
use docstudy::infrastructure::text_processing::PlainTextAdapter;

#[tokio::test]
async fn given_utf8_text_when_extracting_then_sanitized_single_page() {
    let extracted = PlainTextAdapter
        .extract("Hello   world\r\n\r\n\r\nBye".as_bytes(), ContentType::Text)
        .await
        .unwrap();

    assert_eq!(extracted.text, "Hello world\n\nBye");
    assert_eq!(extracted.page_count, 1);
}

#[tokio::test]
async fn given_byte_order_mark_when_extracting_then_it_is_stripped() {
    let extracted = PlainTextAdapter
        .extract("\u{feff}Chapter 1".as_bytes(), ContentType::Text)
        .await
        .unwrap();

    assert_eq!(extracted.text, "Chapter 1");
}

#[tokio::test]
async fn given_invalid_utf8_when_extracting_then_extraction_failed() {
    let result = PlainTextAdapter
        .extract(&[0xc3, 0x28], ContentType::Text)
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_pdf_content_type_when_extracting_then_unsupported() {
    let result = PlainTextAdapter.extract(b"%PDF", ContentType::Pdf).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
