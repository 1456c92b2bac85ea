use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::ContentSource;
use crate::infrastructure::observability::log_preview;
use crate::presentation::state::AppState;

use super::errors::{content_error_response, json_body, parse_document_id};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub file_id: String,
    #[serde(default)]
    pub question: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub question: String,
    pub answer: String,
    pub relevant_sentences: usize,
    pub source: ContentSource,
}

#[tracing::instrument(skip(state, payload))]
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let id = match parse_document_id(&request.file_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    tracing::debug!(question = %log_preview(&request.question), "Processing question");

    match state.chat_service.answer(id, &request.question).await {
        Ok(answer) => (
            StatusCode::OK,
            Json(ChatResponse {
                question: answer.question,
                answer: answer.answer,
                relevant_sentences: answer.relevant_sentences,
                source: answer.source,
            }),
        )
            .into_response(),
        Err(e) => content_error_response(e),
    }
}
