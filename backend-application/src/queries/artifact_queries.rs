use anyhow::anyhow;
use serde_json::Value;
use tracing::{error, info};

use backend_domain::ArtifactError;

use crate::{AppError, AppState};

pub async fn get_seti_candidates(state: &AppState) -> Result<Value, AppError> {
    match state.artifact_repo.read_candidate_artifact().await {
        Ok(value) => Ok(value),
        Err(ArtifactError::NotFound { path }) => {
            info!("candidate artifact not present yet: {}", path);
            Err(AppError::NotFound {
                error: "SETI analysis not run yet".to_string(),
                message: format!("Run {} first", state.config.candidate_producer),
            })
        }
        Err(err @ ArtifactError::Read(_)) => {
            error!("{}", err);
            Err(AppError::Internal(anyhow!(err)))
        }
    }
}
