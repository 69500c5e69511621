use backend_domain::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("{error}")]
    NotFound { error: String, message: String },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Unavailable(msg) => AppError::StoreUnavailable(msg),
            err @ StoreError::Query(_) => AppError::Internal(err.into()),
        }
    }
}
