use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::{ContentSource, Flashcard};
use crate::presentation::state::AppState;

use super::errors::{content_error_response, json_body, parse_document_id};

fn default_use_nlu() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardRequest {
    pub file_id: String,
    pub count: Option<usize>,
    #[serde(default = "default_use_nlu")]
    pub use_nlu: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardResponse {
    pub success: bool,
    pub flashcards: Vec<Flashcard>,
    pub count: usize,
    pub source: ContentSource,
    pub filename: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn flashcards_handler(
    State(state): State<AppState>,
    payload: Result<Json<FlashcardRequest>, JsonRejection>,
) -> Response {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let id = match parse_document_id(&request.file_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let count = state.settings.generation.clamp_count(request.count);

    match state
        .flashcard_service
        .generate(id, count, request.use_nlu)
        .await
    {
        Ok(set) => (
            StatusCode::OK,
            Json(FlashcardResponse {
                success: true,
                count: set.flashcards.len(),
                flashcards: set.flashcards,
                source: set.source,
                filename: set.filename,
            }),
        )
            .into_response(),
        Err(e) => content_error_response(e),
    }
}
