use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    agent_capabilities_handler, agent_chat_handler, agent_health_handler, audio_handler,
    chat_handler, delete_document_handler, download_handler, flashcards_handler,
    get_document_handler, health_handler, list_documents_handler, podcast_handler,
    providers_handler, quiz_handler, summary_handler, upload_handler, view_handler,
    voices_handler,
};
use crate::presentation::state::AppState;

// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = (state.settings.upload.max_file_size_bytes() as usize)
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/providers", get(providers_handler))
        .route("/api/voices", get(voices_handler))
        .route("/api/upload", post(upload_handler))
        .route("/api/documents", get(list_documents_handler))
        .route(
            "/api/document/{file_id}",
            get(get_document_handler).delete(delete_document_handler),
        )
        .route("/api/download/{file_id}", get(download_handler))
        .route("/api/view/{file_id}", get(view_handler))
        .route("/api/generate-summary", post(summary_handler))
        .route("/api/generate-flashcards", post(flashcards_handler))
        .route("/api/quiz/generate", post(quiz_handler))
        .route("/api/generate-podcast", post(podcast_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/ai-agent/chat", post(agent_chat_handler))
        .route("/api/ai-agent/capabilities", get(agent_capabilities_handler))
        .route("/api/ai-agent/health", get(agent_health_handler))
        .route("/api/audio/{file_name}", get(audio_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
