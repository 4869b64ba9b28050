use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    let catalog = Router::new().route("/lookup", get(handlers::catalog::lookup));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router())
        .route("/scan", post(handlers::scan::scan))
        .nest("/catalog", catalog)
}
