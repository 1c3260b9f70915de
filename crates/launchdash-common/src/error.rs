use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    #[error("Dataset contains no launch records")]
    EmptyDataset,

    #[error("Invalid payload range: min {lo} is greater than max {hi}")]
    InvalidRange { lo: f64, hi: f64 },

    #[error("Unknown launch site: {0}")]
    UnknownSite(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, DashError>;

/// Error returned from HTTP handlers, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: message.into() }
    }
}

impl From<DashError> for ApiError {
    fn from(err: DashError) -> Self {
        match err {
            DashError::InvalidRange { .. }
            | DashError::UnknownSite(_)
            | DashError::InvalidInput(_) => Self::bad_request(err.to_string()),
            other => {
                tracing::error!("request failed: {}", other);
                Self::internal(other.to_string())
            }
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self { status: rejection.status(), message: rejection.body_text() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_map_to_bad_request() {
        let err: ApiError = DashError::InvalidRange { lo: 5.0, hi: 1.0 }.into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err: ApiError = DashError::UnknownSite("Boca Chica".to_string()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("Boca Chica"));
    }

    #[test]
    fn test_load_errors_map_to_internal() {
        let err: ApiError = DashError::EmptyDataset.into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
