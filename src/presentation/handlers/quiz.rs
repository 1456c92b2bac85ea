use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::{ContentSource, QuizQuestion};
use crate::presentation::state::AppState;

use super::errors::{content_error_response, json_body, parse_document_id};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    pub file_id: String,
    pub count: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub success: bool,
    pub questions: Vec<QuizQuestion>,
    pub count: usize,
    pub source: ContentSource,
    pub filename: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn quiz_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
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

    match state.quiz_service.generate(id, count).await {
        Ok(quiz) => (
            StatusCode::OK,
            Json(QuizResponse {
                success: true,
                count: quiz.questions.len(),
                questions: quiz.questions,
                source: quiz.source,
                filename: quiz.filename,
            }),
        )
            .into_response(),
        Err(e) => content_error_response(e),
    }
}
