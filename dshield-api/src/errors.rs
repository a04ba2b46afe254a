// Error types for the HTTP layer
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dshield_repository::MockDataError;
use thiserror::Error;
use tracing::warn;

use crate::models::ErrorBody;

/// Errors returned by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// A fixture store rejected the request
    #[error(transparent)]
    Data(#[from] MockDataError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Store lookups only fail on unknown ids.
            ApiError::Data(_) => StatusCode::NOT_FOUND,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Data(e) => e.detail().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(error = %self, status = status.as_u16(), "Request rejected");

        (
            status,
            Json(ErrorBody {
                detail: self.detail(),
            }),
        )
            .into_response()
    }
}

/// Errors that stop the server from starting or serving
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind or serve on the configured address
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to install the tracing subscriber
    #[error("Tracing initialization error: {0}")]
    Tracing(String),
}

impl ServerError {
    /// Create a tracing initialization error.
    pub fn tracing(msg: impl Into<String>) -> Self {
        Self::Tracing(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(MockDataError::job_not_found("abc"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.detail(), "Job not found");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_entity_detail() {
        let err = ApiError::from(MockDataError::entity_not_found("p_999"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.detail(), "Entity not found");
        assert_eq!(err.to_string(), "Entity not found: p_999");
    }
}
