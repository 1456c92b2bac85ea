use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::DocumentAnalysis;
use crate::domain::ContentSource;
use crate::presentation::state::AppState;

use super::errors::{content_error_response, json_body, parse_document_id};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub file_id: String,
    #[serde(default)]
    pub include_analysis: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyTermResponse {
    pub text: String,
    pub relevance: f32,
}

#[derive(Serialize)]
pub struct ScoredTextResponse {
    pub text: String,
    pub relevance: f32,
}

#[derive(Serialize)]
pub struct CategoryResponse {
    pub label: String,
    pub score: f32,
}

#[derive(Serialize)]
pub struct SentimentResponse {
    pub label: String,
    pub score: f32,
}

#[derive(Serialize)]
pub struct EmotionResponse {
    pub anger: f32,
    pub disgust: f32,
    pub fear: f32,
    pub joy: f32,
    pub sadness: f32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub concepts: Vec<ScoredTextResponse>,
    pub categories: Vec<CategoryResponse>,
    pub sentiment: SentimentResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionResponse>,
    pub source: ContentSource,
}

impl From<DocumentAnalysis> for AnalysisResponse {
    fn from(analysis: DocumentAnalysis) -> Self {
        Self {
            concepts: analysis
                .concepts
                .into_iter()
                .map(|c| ScoredTextResponse {
                    text: c.text,
                    relevance: c.relevance,
                })
                .collect(),
            categories: analysis
                .categories
                .into_iter()
                .map(|c| CategoryResponse {
                    label: c.label,
                    score: c.score,
                })
                .collect(),
            sentiment: SentimentResponse {
                label: analysis.sentiment.label,
                score: analysis.sentiment.score,
            },
            emotion: analysis.emotion.map(|e| EmotionResponse {
                anger: e.anger,
                disgust: e.disgust,
                fear: e.fear,
                joy: e.joy,
                sadness: e.sadness,
            }),
            source: analysis.source,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub success: bool,
    pub summary: String,
    pub original_length: usize,
    pub summary_length: usize,
    pub source: ContentSource,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_terms: Option<Vec<KeyTermResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResponse>,
}

#[tracing::instrument(skip(state, payload))]
pub async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let id = match parse_document_id(&request.file_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .summary_service
        .summarize(id, request.include_analysis)
        .await
    {
        Ok(summary) => (
            StatusCode::OK,
            Json(SummaryResponse {
                success: true,
                summary: summary.summary,
                original_length: summary.original_length,
                summary_length: summary.summary_length,
                source: summary.source,
                filename: summary.filename,
                key_terms: summary.key_terms.map(|terms| {
                    terms
                        .into_iter()
                        .map(|t| KeyTermResponse {
                            text: t.text,
                            relevance: t.relevance,
                        })
                        .collect()
                }),
                analysis: summary.analysis.map(AnalysisResponse::from),
            }),
        )
            .into_response(),
        Err(e) => content_error_response(e),
    }
}
