use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{FileLoaderError, FileStoreError};
use crate::application::services::{ContentError, DocumentError};
use crate::domain::DocumentId;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Malformed ids are a client error; ids that parse but match nothing are 404s
/// raised later by the services.
pub fn parse_document_id(raw: &str) -> Result<DocumentId, Response> {
    raw.parse::<DocumentId>().map_err(|e| {
        tracing::warn!(file_id = %raw, "Invalid file ID");
        error_response(StatusCode::BAD_REQUEST, e)
    })
}

/// Replaces axum's plain-text rejection bodies with the JSON error shape.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected request body");
        error_response(StatusCode::BAD_REQUEST, rejection.body_text())
    })
}

pub fn content_error_response(error: ContentError) -> Response {
    let status = match &error {
        ContentError::DocumentNotFound(_) => StatusCode::NOT_FOUND,
        ContentError::InsufficientContent { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ContentError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        ContentError::FileStore(FileStoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        ContentError::Repository(_) | ContentError::FileStore(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    log_failure(status, &error);
    error_response(status, error.to_string())
}

pub fn document_error_response(error: DocumentError) -> Response {
    let status = match &error {
        DocumentError::EmptyFile => StatusCode::BAD_REQUEST,
        DocumentError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        DocumentError::NotFound(_) => StatusCode::NOT_FOUND,
        DocumentError::Extraction(FileLoaderError::UnsupportedContentType(_)) => {
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        }
        DocumentError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DocumentError::FileStore(FileStoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        DocumentError::Repository(_) | DocumentError::FileStore(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    log_failure(status, &error);
    error_response(status, error.to_string())
}

fn log_failure(status: StatusCode, error: &dyn std::error::Error) {
    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), error = %error, "Request failed");
    } else {
        tracing::warn!(status = status.as_u16(), error = %error, "Request rejected");
    }
}
