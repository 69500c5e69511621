use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("query failed: {0}")]
    Query(String),
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("candidate artifact not found: {path}")]
    NotFound { path: String },
    #[error("failed to read candidate artifact: {0}")]
    Read(String),
}
