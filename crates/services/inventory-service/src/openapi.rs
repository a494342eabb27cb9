//! OpenAPI documentation.

use common::HealthResponse;
use utoipa::OpenApi;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(title = "Inventory Service"),
    paths(crate::handlers::health_handler::health_check),
    components(schemas(HealthResponse)),
    tags((name = "Health", description = "Service health endpoints"))
)]
pub struct ApiDoc;
