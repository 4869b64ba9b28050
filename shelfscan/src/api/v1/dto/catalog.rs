//! Catalog lookup DTOs for the v1 API.

use serde::Deserialize;

/// Query parameters for `GET /api/v1/catalog/lookup`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
pub struct CatalogLookupQuery {
    /// Free-text search, usually a book title.
    pub q: Option<String>,
}
