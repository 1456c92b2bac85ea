use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::excerpt;
use crate::domain::{ContentType, Document};
use crate::presentation::state::AppState;

use super::errors::{document_error_response, error_response, parse_document_id};

const TEXT_PREVIEW_CHARS: usize = 500;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub file_id: String,
    pub filename: String,
    pub content_type: String,
    pub size: u64,
    pub pages: u32,
    pub text_length: usize,
    pub uploaded_at: String,
}

impl From<&Document> for DocumentResponse {
    fn from(document: &Document) -> Self {
        Self {
            file_id: document.id.to_string(),
            filename: document.filename.clone(),
            content_type: document.content_type.as_mime().to_string(),
            size: document.size_bytes,
            pages: document.page_count,
            text_length: document.text_length(),
            uploaded_at: document.uploaded_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    #[serde(flatten)]
    pub document: DocumentResponse,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDetailResponse {
    #[serde(flatten)]
    pub document: DocumentResponse,
    pub text_preview: String,
}

#[derive(Serialize)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentResponse>,
    pub count: usize,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let (filename, content_type_str, data) = loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                tracing::warn!("Upload request with no file");
                return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return error_response(e.status(), format!("Failed to read multipart: {}", e));
            }
        };
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type_str = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        match field.bytes().await {
            Ok(data) => break (filename, content_type_str, data),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read file bytes");
                return error_response(e.status(), format!("Failed to read file: {}", e));
            }
        }
    };

    let essence = content_type_str.split(';').next().unwrap_or_default().trim();
    let content_type = match ContentType::from_mime(essence)
        .or_else(|| ContentType::from_filename(&filename))
    {
        Some(ct) => ct,
        None => {
            tracing::warn!(
                content_type = %content_type_str,
                filename = %filename,
                "Unsupported content type"
            );
            return error_response(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                format!("Unsupported content type: {}", content_type_str),
            );
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "File data received");

    match state
        .document_service
        .upload(data, filename, content_type)
        .await
    {
        Ok(document) => (
            StatusCode::OK,
            Json(UploadResponse {
                success: true,
                document: DocumentResponse::from(&document),
            }),
        )
            .into_response(),
        Err(e) => document_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_documents_handler(State(state): State<AppState>) -> Response {
    match state.document_service.list().await {
        Ok(documents) => {
            let documents: Vec<DocumentResponse> =
                documents.iter().map(DocumentResponse::from).collect();
            (
                StatusCode::OK,
                Json(DocumentListResponse {
                    count: documents.len(),
                    documents,
                }),
            )
                .into_response()
        }
        Err(e) => document_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_document_handler(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
) -> Response {
    let id = match parse_document_id(&file_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.document_service.get(id).await {
        Ok(document) => (
            StatusCode::OK,
            Json(DocumentDetailResponse {
                document: DocumentResponse::from(&document),
                text_preview: excerpt(&document.raw_text, TEXT_PREVIEW_CHARS).to_string(),
            }),
        )
            .into_response(),
        Err(e) => document_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn delete_document_handler(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
) -> Response {
    let id = match parse_document_id(&file_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.document_service.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                success: true,
                message: "Document deleted".to_string(),
            }),
        )
            .into_response(),
        Err(e) => document_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn download_handler(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
) -> Response {
    serve_original(&state, &file_id, "attachment").await
}

#[tracing::instrument(skip(state))]
pub async fn view_handler(State(state): State<AppState>, Path(file_id): Path<String>) -> Response {
    serve_original(&state, &file_id, "inline").await
}

async fn serve_original(state: &AppState, file_id: &str, disposition: &str) -> Response {
    let id = match parse_document_id(file_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.document_service.original_bytes(id).await {
        Ok((document, data)) => {
            let disposition = format!(
                "{}; filename=\"{}\"",
                disposition,
                document.filename.replace(['"', '\\', '\r', '\n'], "_")
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, document.content_type.as_mime().to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                Body::from(data),
            )
                .into_response()
        }
        Err(e) => document_error_response(e),
    }
}
