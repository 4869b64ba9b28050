//! v1 Scan handler.
//!
//! Implements `POST /api/v1/scan`: OCR a cover photo into a title and
//! author, optionally reconciled against the book catalog.

use axum::extract::State;
use std::time::Instant;

use crate::api::v1::dto::{ScanRequest, ScanResponse};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;

/// `POST /api/v1/scan`
#[utoipa::path(
    post,
    path = "/api/v1/scan",
    tag = "scan",
    operation_id = "scan.scan",
    request_body = ScanRequest,
    responses(
        (status = 200, description = "Title and author detected", body = ScanResponse),
        (status = 400, description = "Missing or undecodable image", body = ApiError),
        (status = 422, description = "No text or no title detected", body = ApiError),
        (status = 500, description = "OCR engine failure", body = ApiError),
        (status = 503, description = "OCR engine unavailable", body = ApiError),
    )
)]
pub async fn scan(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<ScanRequest>,
) -> ApiResponse<ScanResponse> {
    if req.image.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Image data is required");
    }

    let start = Instant::now();
    let result = if req.resolve {
        state
            .scanner
            .scan_and_resolve(&req.image)
            .await
            .map(ScanResponse::from)
    } else {
        state.scanner.scan(&req.image).await.map(ScanResponse::from)
    };

    let elapsed_ms = start.elapsed().as_millis() as u64;
    match result {
        Ok(resp) => {
            tracing::info!(
                elapsed_ms,
                resolve = req.resolve,
                matched = resp.matched,
                "Scan completed"
            );
            ApiResponse::success(resp)
        }
        Err(e) => {
            tracing::info!(elapsed_ms, error = %e, "Scan rejected");
            e.into()
        }
    }
}
