use tracing::error;

use backend_domain::{
    ClassificationTier, RareSignalEvent, UltraRareEvent, RARE_SIGNAL_LIMIT, RARE_SIGNAL_SCORE,
    RECENT_LIMIT, ULTRA_RARE_THRESHOLD,
};

use crate::dtos::{RareSignalResponse, RecentResponse, UltraRareResponse};
use crate::{AppError, AppState};

pub async fn list_rare_signal(state: &AppState) -> Result<RareSignalResponse, AppError> {
    let rows = state
        .anomaly_repo
        .fetch_rare_signal_rows(RARE_SIGNAL_LIMIT)
        .await
        .map_err(|err| {
            error!("failed to fetch rare signal events: {}", err);
            AppError::from(err)
        })?;
    let events: Vec<RareSignalEvent> = rows.into_iter().map(RareSignalEvent::from).collect();
    Ok(RareSignalResponse {
        total: events.len(),
        classification: ClassificationTier::RareSignal.label(),
        score: RARE_SIGNAL_SCORE,
        events,
    })
}

pub async fn list_ultra_rare(state: &AppState) -> Result<UltraRareResponse, AppError> {
    let rows = state
        .anomaly_repo
        .fetch_ultra_rare_rows()
        .await
        .map_err(|err| {
            error!("failed to fetch ultra rare events: {}", err);
            AppError::from(err)
        })?;
    let events: Vec<UltraRareEvent> = rows.into_iter().map(UltraRareEvent::from).collect();
    Ok(UltraRareResponse {
        total: events.len(),
        classification: ClassificationTier::UltraRare.label(),
        score_threshold: ULTRA_RARE_THRESHOLD,
        events,
    })
}

pub async fn list_recent(state: &AppState) -> Result<RecentResponse, AppError> {
    let events = state
        .anomaly_repo
        .fetch_recent(RECENT_LIMIT)
        .await
        .map_err(|err| {
            error!("failed to fetch recent events: {}", err);
            AppError::from(err)
        })?;
    Ok(RecentResponse {
        total: events.len(),
        events,
    })
}
