use std::sync::Arc;

use backend_domain::ports::{AnomalyRepository, ArtifactRepository};
use backend_domain::RuntimeConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub anomaly_repo: Arc<dyn AnomalyRepository>,
    pub artifact_repo: Arc<dyn ArtifactRepository>,
}
