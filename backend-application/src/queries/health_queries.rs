use tracing::warn;

use crate::dtos::ReadinessResponse;
use crate::AppState;

/// Pings the store; readiness never fails the request itself.
pub async fn check_ready(state: &AppState) -> ReadinessResponse {
    match state.anomaly_repo.ping().await {
        Ok(()) => ReadinessResponse {
            status: "ready",
            error: None,
        },
        Err(err) => {
            warn!("readiness check failed: {}", err);
            ReadinessResponse {
                status: "unavailable",
                error: Some(err.to_string()),
            }
        }
    }
}
