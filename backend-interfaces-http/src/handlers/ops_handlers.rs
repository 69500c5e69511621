use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use backend_application::dtos::{HealthResponse, ReadinessResponse};
use backend_application::queries::health_queries;
use backend_application::AppState;

pub async fn health_live() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

pub async fn health_ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let readiness = health_queries::check_ready(&state).await;
    let status = if readiness.error.is_none() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(readiness))
}
