use axum::extract::State;
use axum::Json;
use serde_json::Value;

use backend_application::dtos::{
    RareSignalResponse, RecentResponse, StatsResponse, StatusResponse, UltraRareResponse,
};
use backend_application::queries::{artifact_queries, stats_queries, status_queries, tier_queries};
use backend_application::AppState;

use crate::error::HttpError;

pub async fn get_status(State(state): State<AppState>) -> Result<Json<StatusResponse>, HttpError> {
    let status = status_queries::get_status(&state).await?;
    Ok(Json(status))
}

pub async fn list_level3(
    State(state): State<AppState>,
) -> Result<Json<RareSignalResponse>, HttpError> {
    let listing = tier_queries::list_rare_signal(&state).await?;
    Ok(Json(listing))
}

pub async fn list_ultra_rare(
    State(state): State<AppState>,
) -> Result<Json<UltraRareResponse>, HttpError> {
    let listing = tier_queries::list_ultra_rare(&state).await?;
    Ok(Json(listing))
}

pub async fn list_recent(State(state): State<AppState>) -> Result<Json<RecentResponse>, HttpError> {
    let listing = tier_queries::list_recent(&state).await?;
    Ok(Json(listing))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, HttpError> {
    let stats = stats_queries::get_stats(&state).await?;
    Ok(Json(stats))
}

pub async fn get_seti_candidates(State(state): State<AppState>) -> Result<Json<Value>, HttpError> {
    let candidates = artifact_queries::get_seti_candidates(&state).await?;
    Ok(Json(candidates))
}
