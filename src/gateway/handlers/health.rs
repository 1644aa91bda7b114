//! Health check handler

use axum::Json;
use utoipa::ToSchema;

use super::super::types::ApiResponse;
use super::helpers::now_ms;

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
    /// Git revision the binary was built from
    #[schema(example = "3f2c1ab")]
    pub version: &'static str,
}

/// Health check endpoint
///
/// The ledger lives in process memory, so a responding server is a
/// healthy one.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn health_check() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        timestamp_ms: now_ms(),
        version: env!("GIT_HASH"),
    }))
}
