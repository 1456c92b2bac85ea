use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::application::ports::AudioFormat;
use crate::domain::{ContentSource, SyncPoint};
use crate::presentation::state::AppState;

use super::errors::{content_error_response, error_response, json_body, parse_document_id};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastRequest {
    pub file_id: String,
    pub voice: Option<String>,
    pub format: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentResponse {
    pub url: String,
    pub duration: u64,
    pub size_bytes: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastAudio {
    pub segments: Vec<SegmentResponse>,
    pub total_duration: u64,
    pub voice: String,
    pub format: String,
    pub segment_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastMetadata {
    pub original_text_length: usize,
    pub filename: String,
    pub generated_at: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastResponse {
    pub success: bool,
    pub podcast: PodcastAudio,
    pub transcript: String,
    pub sync_data: Vec<SyncPoint>,
    pub source: ContentSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub metadata: PodcastMetadata,
}

/// Answers 200 even when speech synthesis is unavailable: `success` is false
/// and the transcript with its sync data is still returned.
#[tracing::instrument(skip(state, payload))]
pub async fn podcast_handler(
    State(state): State<AppState>,
    payload: Result<Json<PodcastRequest>, JsonRejection>,
) -> Response {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let id = match parse_document_id(&request.file_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let format = match request.format.as_deref() {
        None => AudioFormat::Mp3,
        Some(raw) => match AudioFormat::parse(raw) {
            Some(format) => format,
            None => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Unsupported audio format: {}", raw),
                );
            }
        },
    };
    let voice = request
        .voice
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| state.settings.tts.default_voice.clone());

    match state.podcast_service.generate(id, &voice, format).await {
        Ok(podcast) => (
            StatusCode::OK,
            Json(PodcastResponse {
                success: podcast.success,
                podcast: PodcastAudio {
                    segment_count: podcast.segments.len(),
                    segments: podcast
                        .segments
                        .into_iter()
                        .map(|s| SegmentResponse {
                            url: s.url,
                            duration: s.duration_secs,
                            size_bytes: s.size_bytes,
                        })
                        .collect(),
                    total_duration: podcast.total_duration_secs,
                    voice: podcast.voice,
                    format: podcast.format.extension().to_string(),
                },
                transcript: podcast.transcript,
                sync_data: podcast.sync_data,
                source: podcast.source,
                message: podcast.message,
                metadata: PodcastMetadata {
                    original_text_length: podcast.original_text_length,
                    filename: podcast.filename,
                    generated_at: Utc::now().to_rfc3339(),
                },
            }),
        )
            .into_response(),
        Err(e) => content_error_response(e),
    }
}
