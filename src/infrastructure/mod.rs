pub mod auth;
pub mod llm;
pub mod nlu;
pub mod observability;
pub mod provider_factory;
pub mod speech;
pub mod storage;
pub mod text_processing;
