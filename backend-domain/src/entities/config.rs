// Runtime configuration handed to the layers at construction

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub system_name: String,
    pub candidate_artifact_path: PathBuf,
    pub candidate_producer: String,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub database_path: PathBuf,
    pub busy_timeout_ms: u64,
}
