use tracing::error;

use backend_domain::{round_to_cents, TOP_LOCATIONS_LIMIT};

use crate::dtos::{AverageScore, StatsResponse};
use crate::{AppError, AppState};

pub async fn get_stats(state: &AppState) -> Result<StatsResponse, AppError> {
    let raw = state
        .anomaly_repo
        .fetch_statistics(TOP_LOCATIONS_LIMIT)
        .await
        .map_err(|err| {
            error!("failed to compute statistics: {}", err);
            AppError::from(err)
        })?;
    let average_score = raw
        .average_score
        .filter(|avg| avg.is_finite() && *avg != 0.0)
        .map(round_to_cents);
    Ok(StatsResponse {
        levels: raw.levels,
        top_locations: raw.top_locations,
        average_score: AverageScore(average_score),
    })
}
