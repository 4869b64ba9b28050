use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shelfscan API",
        version = "1.0.0",
        description = "Book cover scanner. OCR a cover photo into a title and author.",
    ),
    paths(
        handlers::health::health_check,
        handlers::scan::scan,
        handlers::catalog::lookup,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Scan
        dto::scan::ScanRequest,
        dto::scan::ScanResponse,
        // Catalog
        dto::catalog::CatalogLookupQuery,
        crate::catalog::CatalogMatch,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::OcrStatus,
        handlers::health::CatalogStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "scan", description = "Cover photo OCR and title/author extraction"),
        (name = "catalog", description = "Book catalog lookup"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
