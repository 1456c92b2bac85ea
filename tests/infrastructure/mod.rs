mod json_document_repository_test;
mod llm_client_factory_test;
mod log_preview_test;
mod pdf_adapter_test;
mod plain_text_adapter_test;
mod tracing_config_test;
