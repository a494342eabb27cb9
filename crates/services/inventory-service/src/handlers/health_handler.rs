//! Health check handlers.

use axum::{routing::get, Json, Router};
use common::{server::method_not_allowed, HealthResponse};

use crate::SERVICE_NAME;

/// Create health routes.
///
/// Only `GET` is served; `HEAD` would otherwise fall through to the `GET`
/// handler.
pub fn health_routes() -> Router {
    Router::new().route(
        "/",
        get(health_check)
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    )
}

/// Report that the inventory service is up.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok(SERVICE_NAME))
}
