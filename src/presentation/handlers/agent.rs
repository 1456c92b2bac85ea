use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::application::services::{
    AGENT_FEATURES, AgentRequest, ConversationMode, ConversationTurn, Personality, Speaker,
};
use crate::domain::{ContentSource, DocumentId};
use crate::presentation::state::AppState;

use super::errors::{content_error_response, json_body};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(rename = "type", alias = "role", default)]
    pub speaker: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentChatRequest {
    pub document_id: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<HistoryEntry>,
    pub personality: Option<String>,
    pub mode: Option<String>,
}

#[derive(Serialize)]
pub struct ActionResponse {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentMetadata {
    pub document_id: Option<String>,
    pub has_document: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentChatResponse {
    pub success: bool,
    pub message: String,
    pub confidence: f32,
    pub suggestions: Vec<String>,
    pub actions: Vec<ActionResponse>,
    pub personality: &'static str,
    pub mode: &'static str,
    pub timestamp: String,
    pub source: ContentSource,
    pub metadata: AgentMetadata,
}

#[derive(Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCapabilitiesResponse {
    pub personalities: Vec<CatalogEntry>,
    pub modes: Vec<CatalogEntry>,
    pub features: Vec<&'static str>,
    pub llm_available: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCapabilityStatus {
    pub language_model: &'static str,
    pub speech_recognition: &'static str,
    pub conversation_export: &'static str,
}

#[derive(Serialize)]
pub struct AgentHealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
    pub capabilities: AgentCapabilityStatus,
}

fn to_turn(entry: HistoryEntry) -> ConversationTurn {
    let speaker = match entry.speaker.trim().to_lowercase().as_str() {
        "user" | "human" => Speaker::User,
        _ => Speaker::Assistant,
    };
    ConversationTurn {
        speaker,
        content: entry.content,
    }
}

#[tracing::instrument(skip(state, payload))]
pub async fn agent_chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<AgentChatRequest>, JsonRejection>,
) -> Response {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    // An unparseable id means "no document", same as an unknown one.
    let document_id = request
        .document_id
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| match raw.parse::<DocumentId>() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed agent document id");
                None
            }
        });

    let agent_request = AgentRequest {
        document_id,
        message: request.message,
        history: request
            .conversation_history
            .into_iter()
            .map(to_turn)
            .collect(),
        personality: request
            .personality
            .as_deref()
            .map(Personality::parse)
            .unwrap_or_default(),
        mode: request
            .mode
            .as_deref()
            .map(ConversationMode::parse)
            .unwrap_or_default(),
    };

    match state.agent_service.chat(agent_request).await {
        Ok(reply) => (
            StatusCode::OK,
            Json(AgentChatResponse {
                success: true,
                message: reply.message,
                confidence: reply.confidence,
                suggestions: reply.suggestions,
                actions: reply
                    .actions
                    .into_iter()
                    .map(|action| ActionResponse {
                        kind: action.as_str(),
                        label: action.label(),
                        description: action.description(),
                    })
                    .collect(),
                personality: reply.personality.as_str(),
                mode: reply.mode.as_str(),
                timestamp: Utc::now().to_rfc3339(),
                source: reply.source,
                metadata: AgentMetadata {
                    document_id: document_id.map(|id| id.to_string()),
                    has_document: reply.has_document,
                },
            }),
        )
            .into_response(),
        Err(e) => content_error_response(e),
    }
}

pub async fn agent_capabilities_handler(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        Json(AgentCapabilitiesResponse {
            personalities: Personality::ALL
                .iter()
                .map(|p| CatalogEntry {
                    id: p.as_str(),
                    name: p.label(),
                    description: p.description(),
                })
                .collect(),
            modes: ConversationMode::ALL
                .iter()
                .map(|m| CatalogEntry {
                    id: m.as_str(),
                    name: m.label(),
                    description: m.description(),
                })
                .collect(),
            features: AGENT_FEATURES.to_vec(),
            llm_available: state.gateway.status().llm,
        }),
    )
        .into_response()
}

/// The assistant always answers; without a language model it runs on rules.
pub async fn agent_health_handler(State(state): State<AppState>) -> Response {
    let language_model = if state.gateway.status().llm {
        "available"
    } else {
        "fallback_mode"
    };
    (
        StatusCode::OK,
        Json(AgentHealthResponse {
            status: "active",
            service: "AI Learning Assistant",
            timestamp: Utc::now().to_rfc3339(),
            capabilities: AgentCapabilityStatus {
                language_model,
                speech_recognition: "browser_supported",
                conversation_export: "available",
            },
        }),
    )
        .into_response()
}
