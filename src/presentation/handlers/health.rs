use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub documents: usize,
    pub offline: bool,
    pub timestamp: String,
}

/// Degraded when the document index cannot be read; `offline` means every
/// artifact will come from the fallback generators.
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let providers = state.gateway.status();
    let offline = !(providers.llm || providers.nlu || providers.tts);

    let (status_code, status, documents) = match state.document_service.list().await {
        Ok(documents) => (StatusCode::OK, "healthy", documents.len()),
        Err(e) => {
            tracing::error!(error = %e, "Health check could not read the document index");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", 0)
        }
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            documents,
            offline,
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
        .into_response()
}
