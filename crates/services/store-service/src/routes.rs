//! Route configuration.

use axum::Router;
use common::server::not_found;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::health_routes;
use crate::openapi::ApiDoc;

/// Create the main router with all routes.
pub fn create_router() -> Router {
    Router::new()
        .merge(health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
}
