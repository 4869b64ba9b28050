//! # V1 API Response Envelope & Error Contract
//!
//! Every v1 endpoint returns an [`ApiResponse<T>`] envelope:
//!
//! ```json
//! {
//!   "data": { ... },   // present on success, absent on error
//!   "error": { "code": "no_title_detected", "message": "...", "rawText": "..." }
//! }
//! ```
//!
//! `rawText` is only attached when text was recognized but no title could be
//! picked from it, so the client can offer manual entry.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ShelfScanError;

/// Machine-readable error code included in every error response.
///
/// Serialized as a snake_case string on the wire (e.g. `"invalid_image"`).
/// Each variant maps to a fixed HTTP status code via [`ErrorCode::status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed request or failed validation. HTTP 400.
    InvalidRequest,
    /// The image payload could not be decoded. HTTP 400.
    InvalidImage,
    /// OCR ran but found no text; the client should retake the photo. HTTP 422.
    NoTextDetected,
    /// Text was found but no title line could be picked. HTTP 422.
    NoTitleDetected,
    /// The OCR engine failed. HTTP 500.
    OcrFailed,
    /// The OCR engine is not installed or lacks language data. HTTP 503.
    OcrUnavailable,
    /// The requested feature is disabled on this server. HTTP 501.
    NotImplemented,
    /// Unexpected server-side error; details are never leaked. HTTP 500.
    InternalError,
}

impl ErrorCode {
    /// Returns the HTTP status code corresponding to this error code.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest | Self::InvalidImage => StatusCode::BAD_REQUEST,
            Self::NoTextDetected | Self::NoTitleDetected => StatusCode::UNPROCESSABLE_ENTITY,
            Self::OcrFailed | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::OcrUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::InvalidImage => write!(f, "invalid_image"),
            Self::NoTextDetected => write!(f, "no_text_detected"),
            Self::NoTitleDetected => write!(f, "no_title_detected"),
            Self::OcrFailed => write!(f, "ocr_failed"),
            Self::OcrUnavailable => write!(f, "ocr_unavailable"),
            Self::NotImplemented => write!(f, "not_implemented"),
            Self::InternalError => write!(f, "internal_error"),
        }
    }
}

/// Structured error payload within the API envelope.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error classification.
    pub code: ErrorCode,
    /// Human-readable description safe to display to end users.
    pub message: String,
    /// Recognized text, for manual entry when no title was detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

/// Canonical v1 API response envelope.
///
/// On success, `data` is present and `error` is absent. On error, `error` is
/// present and `data` is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,

    /// HTTP status to use in the response. Not serialized on the wire.
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success response with data (HTTP 200).
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            status: StatusCode::OK,
        }
    }

    /// Error response. HTTP status is derived from the [`ErrorCode`].
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        let status = code.status();
        Self {
            data: None,
            error: Some(ApiError {
                code,
                message: message.into(),
                raw_text: None,
            }),
            status,
        }
    }

    /// Error response carrying the recognized text.
    pub fn error_with_text(
        code: ErrorCode,
        message: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        let mut resp = Self::error(code, message);
        if let Some(err) = resp.error.as_mut() {
            err.raw_text = Some(raw_text.into());
        }
        resp
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        match serde_json::to_value(&self) {
            Ok(body) => (status, Json(body)).into_response(),
            Err(_) => {
                let body = serde_json::json!({
                    "error": {
                        "code": "internal_error",
                        "message": "An internal error occurred"
                    }
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl<T: Serialize> From<ShelfScanError> for ApiResponse<T> {
    /// Convert a [`ShelfScanError`] into a v1 [`ApiResponse`].
    ///
    /// Internal error details are **never** leaked to the client; they are
    /// logged via `tracing::error!` instead.
    fn from(err: ShelfScanError) -> Self {
        match err {
            ShelfScanError::Decode(ref msg) => ApiResponse::error(ErrorCode::InvalidImage, msg.clone()),

            ShelfScanError::Validation(ref msg) => {
                ApiResponse::error(ErrorCode::InvalidRequest, msg.clone())
            }

            ShelfScanError::Json(ref e) => {
                ApiResponse::error(ErrorCode::InvalidRequest, format!("Invalid JSON: {e}"))
            }

            ShelfScanError::NoTextDetected => ApiResponse::error(
                ErrorCode::NoTextDetected,
                "No text could be read from the image; try retaking the photo",
            ),

            ShelfScanError::NoTitleDetected { raw_text } => ApiResponse::error_with_text(
                ErrorCode::NoTitleDetected,
                "Could not detect a book title",
                raw_text,
            ),

            ShelfScanError::Ocr(ref msg) => {
                tracing::error!(error = %msg, "OCR failure mapped to v1 response");
                ApiResponse::error(ErrorCode::OcrFailed, format!("OCR failed: {msg}"))
            }

            ShelfScanError::OcrUnavailable(ref msg) => {
                ApiResponse::error(ErrorCode::OcrUnavailable, msg.clone())
            }

            ref internal @ (ShelfScanError::Http(_)
            | ShelfScanError::Io(_)
            | ShelfScanError::UrlParse(_)
            | ShelfScanError::Internal(_)) => {
                tracing::error!(error = %internal, "Internal error mapped to v1 response");
                ApiResponse::error(ErrorCode::InternalError, "An internal error occurred")
            }
        }
    }
}
