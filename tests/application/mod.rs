mod chat_service_test;
mod context_locator_test;
mod document_service_test;
mod podcast_service_test;
mod term_extractor_test;
