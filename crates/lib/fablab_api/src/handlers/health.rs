//! Health endpoint.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::HealthResponse;

/// `GET /api/health`: reports the version and whether a provider key is set.
/// Never contacts the provider.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: fablab_core::version(),
        provider_configured: state.provider.is_configured(),
    })
}
