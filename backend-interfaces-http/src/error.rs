use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};

#[derive(Debug)]
pub enum HttpError {
    StoreUnavailable(String),
    NotFound { error: String, message: String },
    Internal(String),
}

impl From<backend_application::AppError> for HttpError {
    fn from(value: backend_application::AppError) -> Self {
        match value {
            backend_application::AppError::StoreUnavailable(msg) => HttpError::StoreUnavailable(msg),
            backend_application::AppError::NotFound { error, message } => {
                HttpError::NotFound { error, message }
            }
            backend_application::AppError::Internal(err) => HttpError::Internal(err.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            HttpError::StoreUnavailable(msg) => {
                warn!("responding 503, store unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    format!("store unavailable: {}", msg),
                    None,
                )
            }
            HttpError::NotFound { error, message } => (StatusCode::NOT_FOUND, error, Some(message)),
            HttpError::Internal(msg) => {
                error!("responding 500: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg, None)
            }
        };
        (status, Json(ErrorBody { error, message })).into_response()
    }
}
