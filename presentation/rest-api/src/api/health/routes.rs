use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Always `healthy` while the process serves requests
    pub status: String,
    /// RFC 3339 server time
    pub timestamp: String,
    pub version: String,
}

pub struct HealthApi;

/// Liveness probe
#[OpenApi]
impl HealthApi {
    /// Health check
    ///
    /// Public. Does not touch the database.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
