use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::v1::response::ApiResponse;

/// Health data returned inside the v1 envelope.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub ocr: OcrStatus,
    pub catalog: CatalogStatus,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct OcrStatus {
    pub status: String,
    pub languages: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct CatalogStatus {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// `GET /api/v1/health`
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthData> {
    let recognizer = state.scanner.recognizer();
    let ocr_status = OcrStatus {
        status: if recognizer.is_available() {
            "ok".to_string()
        } else {
            "unavailable".to_string()
        },
        languages: recognizer.languages().to_string(),
    };

    let catalog_status = match state.scanner.catalog() {
        Some(client) => CatalogStatus {
            enabled: true,
            endpoint: Some(client.base_url().to_string()),
        },
        None => CatalogStatus {
            enabled: false,
            endpoint: None,
        },
    };

    ApiResponse::success(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ocr: ocr_status,
        catalog: catalog_status,
    })
}
