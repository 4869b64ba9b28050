use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfScanError {
    /// Payload was not valid base64 or not a recognizable image.
    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),

    /// Recognition succeeded but produced no text at all.
    #[error("No text detected in image")]
    NoTextDetected,

    /// Text was recognized but no line survived the title heuristic.
    #[error("No title detected in recognized text")]
    NoTitleDetected { raw_text: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ShelfScanError {
    /// Raw recognized text attached to the error, if any.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            ShelfScanError::NoTitleDetected { raw_text } => Some(raw_text),
            _ => None,
        }
    }
}

impl IntoResponse for ShelfScanError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ShelfScanError::Decode(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ShelfScanError::Ocr(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            ShelfScanError::OcrUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            ShelfScanError::NoTextDetected => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            ShelfScanError::NoTitleDetected { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            ShelfScanError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ShelfScanError::Http(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            ShelfScanError::Json(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ShelfScanError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ShelfScanError::UrlParse(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ShelfScanError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ShelfScanError>;
