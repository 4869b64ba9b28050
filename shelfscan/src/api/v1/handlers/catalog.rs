//! v1 Catalog handler.

use axum::extract::{Query, State};

use crate::api::v1::dto::CatalogLookupQuery;
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::catalog::CatalogMatch;

/// `GET /api/v1/catalog/lookup`
///
/// Single best-match lookup. A catalog miss or upstream failure still returns
/// 200 with `found: false`; `error` explains failures.
#[utoipa::path(
    get,
    path = "/api/v1/catalog/lookup",
    tag = "catalog",
    operation_id = "catalog.lookup",
    params(CatalogLookupQuery),
    responses(
        (status = 200, description = "Lookup result", body = CatalogMatch),
        (status = 400, description = "Missing query", body = ApiError),
        (status = 501, description = "Catalog lookups disabled", body = ApiError),
    )
)]
pub async fn lookup(
    State(state): State<AppState>,
    Query(query): Query<CatalogLookupQuery>,
) -> ApiResponse<CatalogMatch> {
    let q = match query.q {
        Some(ref q) if !q.trim().is_empty() => q.trim().to_string(),
        _ => {
            return ApiResponse::error(ErrorCode::InvalidRequest, "Search query cannot be empty");
        }
    };

    match state.scanner.lookup(&q).await {
        Some(found) => ApiResponse::success(found),
        None => ApiResponse::error(
            ErrorCode::NotImplemented,
            "Catalog lookups are disabled on this server",
        ),
    }
}
