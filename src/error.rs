use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::translate::interface::TranslateError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("No file provided")]
    MissingFile,

    #[error("Invalid upload body")]
    InvalidBody,

    #[error("Failed to store preview")]
    PreviewIo(#[from] std::io::Error),

    #[error(transparent)]
    Translate(#[from] TranslateError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({"error": "Method not allowed"}),
            ),
            ApiError::MissingFile => (
                StatusCode::BAD_REQUEST,
                json!({"error": "No file provided"}),
            ),
            ApiError::InvalidBody => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Invalid upload body"}),
            ),
            ApiError::PreviewIo(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "Failed to store preview", "details": err.to_string()}),
            ),
            ApiError::Translate(err) => {
                // Network failure, upstream error status and parse failure
                // each surface under their own status.
                let (status, details) = match err {
                    TranslateError::Unreachable(details) => (StatusCode::BAD_GATEWAY, details),
                    TranslateError::UpstreamStatus { status, body } => (
                        StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                        body,
                    ),
                    TranslateError::Malformed(details) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, details)
                    }
                };
                (status, json!({"error": "Translation failed", "details": details}))
            }
        };

        (status, Json(body)).into_response()
    }
}
