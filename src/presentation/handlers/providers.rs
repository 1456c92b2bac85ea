use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::presentation::config::LlmProvider;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct LlmStatus {
    pub configured: bool,
    pub provider: LlmProvider,
    pub model: String,
}

#[derive(Serialize)]
pub struct ServiceStatus {
    pub configured: bool,
}

#[derive(Serialize)]
pub struct ProvidersResponse {
    pub llm: LlmStatus,
    pub nlu: ServiceStatus,
    pub tts: ServiceStatus,
}

/// Which external providers are wired in. Credentials are never echoed.
pub async fn providers_handler(State(state): State<AppState>) -> Response {
    let status = state.gateway.status();
    (
        StatusCode::OK,
        Json(ProvidersResponse {
            llm: LlmStatus {
                configured: status.llm,
                provider: state.settings.llm.provider,
                model: state.settings.llm.model.clone(),
            },
            nlu: ServiceStatus {
                configured: status.nlu,
            },
            tts: ServiceStatus {
                configured: status.tts,
            },
        }),
    )
        .into_response()
}
