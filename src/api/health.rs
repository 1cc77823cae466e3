use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::types::dto::common::HealthResponse;
use crate::types::internal::item::timestamp_now;

/// Health check API
pub struct HealthApi;

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Returns the current status of the API service
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse {
            success: true,
            message: "ItemStore API is running".to_string(),
            timestamp: timestamp_now(),
        })
    }
}
