use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::{Voice, available_voices};
use crate::presentation::state::AppState;

use super::errors::content_error_response;

#[derive(Serialize)]
pub struct VoicesResponse {
    pub voices: &'static [Voice],
    pub default: String,
}

#[tracing::instrument(skip(state))]
pub async fn audio_handler(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Response {
    match state.podcast_service.audio_file(&file_name).await {
        Ok((data, mime)) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            data,
        )
            .into_response(),
        Err(e) => content_error_response(e),
    }
}

pub async fn voices_handler(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        Json(VoicesResponse {
            voices: available_voices(),
            default: state.settings.tts.default_voice.clone(),
        }),
    )
        .into_response()
}
