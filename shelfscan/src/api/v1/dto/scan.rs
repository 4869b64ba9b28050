//! Scan request/response DTOs for the v1 API.

use serde::{Deserialize, Serialize};

use crate::extraction::{ResolvedScan, ScanResult};

/// Request body for `POST /v1/scan`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    /// Base64 image, optionally prefixed with a data URI header
    /// (`data:image/png;base64,...`).
    pub image: String,
    /// Reconcile the OCR result against the book catalog.
    #[serde(default)]
    pub resolve: bool,
}

/// Response for `POST /v1/scan`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub title: String,
    /// Empty when no author line was detected.
    pub author: String,
    /// Whether title and author come from a catalog record.
    pub matched: bool,
    /// Why the catalog lookup failed, when it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_error: Option<String>,
}

impl From<ScanResult> for ScanResponse {
    fn from(scan: ScanResult) -> Self {
        Self {
            title: scan.title,
            author: scan.author,
            matched: false,
            catalog_error: None,
        }
    }
}

impl From<ResolvedScan> for ScanResponse {
    fn from(resolved: ResolvedScan) -> Self {
        Self {
            title: resolved.title,
            author: resolved.author,
            matched: resolved.matched,
            catalog_error: resolved.catalog_error,
        }
    }
}
