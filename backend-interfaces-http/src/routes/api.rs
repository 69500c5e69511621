use axum::routing::get;
use axum::Router;

use backend_application::AppState;

use crate::handlers::{api_handlers, ops_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(api_handlers::get_status))
        .route("/api/level3", get(api_handlers::list_level3))
        .route("/api/ultra-rare", get(api_handlers::list_ultra_rare))
        .route("/api/recent", get(api_handlers::list_recent))
        .route("/api/stats", get(api_handlers::get_stats))
        .route("/api/seti-candidates", get(api_handlers::get_seti_candidates))
        .route("/health", get(ops_handlers::health_live))
        .route("/health/ready", get(ops_handlers::health_ready))
        .with_state(state)
}
