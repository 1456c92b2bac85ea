mod agent;
mod audio;
mod chat;
mod documents;
mod errors;
mod flashcards;
mod health;
mod podcast;
mod providers;
mod quiz;
mod summary;

pub use agent::{agent_capabilities_handler, agent_chat_handler, agent_health_handler};
pub use audio::{audio_handler, voices_handler};
pub use chat::chat_handler;
pub use documents::{
    delete_document_handler, download_handler, get_document_handler, list_documents_handler,
    upload_handler, view_handler,
};
pub use errors::ErrorResponse;
pub use flashcards::flashcards_handler;
pub use health::health_handler;
pub use podcast::podcast_handler;
pub use providers::providers_handler;
pub use quiz::quiz_handler;
pub use summary::summary_handler;
