//! Health payload returned by every service.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status reported by a running service.
pub const STATUS_OK: &str = "ok";

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Name of the answering service
    #[schema(example = "inventory")]
    pub service: String,
    #[schema(example = "ok")]
    pub status: String,
}

impl HealthResponse {
    pub fn ok(service: &str) -> Self {
        Self {
            service: service.to_string(),
            status: STATUS_OK.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_service_then_status() {
        let body = serde_json::to_string(&HealthResponse::ok("store")).unwrap();
        assert_eq!(body, r#"{"service":"store","status":"ok"}"#);
    }
}
