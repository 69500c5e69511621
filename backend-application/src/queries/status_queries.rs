use chrono::Local;
use tracing::error;

use crate::dtos::StatusResponse;
use crate::{AppError, AppState};

pub async fn get_status(state: &AppState) -> Result<StatusResponse, AppError> {
    let stats = state
        .anomaly_repo
        .fetch_status_counts()
        .await
        .map_err(|err| {
            error!("failed to fetch status counts: {}", err);
            AppError::from(err)
        })?;
    Ok(StatusResponse {
        status: "online",
        timestamp: Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
        system: state.config.system_name.clone(),
        stats,
    })
}
