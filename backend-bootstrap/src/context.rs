use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use backend_application::AppState;
use backend_infrastructure::{AppConfig, CandidateArtifactFile, SqliteAnomalyRepo};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Ok(Self::from_config(&config))
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let runtime_config = config.to_runtime_config();
        let store_config = config.to_store_config();
        info!(
            bind_addr = %runtime_config.bind_addr,
            database_path = %store_config.database_path.display(),
            candidate_artifact_path = %runtime_config.candidate_artifact_path.display(),
            "config loaded"
        );

        let artifact_repo = Arc::new(CandidateArtifactFile::new(
            runtime_config.candidate_artifact_path.clone(),
        ));
        let state = AppState {
            config: runtime_config,
            anomaly_repo: Arc::new(SqliteAnomalyRepo::new(store_config)),
            artifact_repo,
        };
        Self { state }
    }
}
