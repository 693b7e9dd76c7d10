use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use roamly_core::CoreError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Misconfigured(String),
    UpstreamFailure(String),
    ContentBackend(String),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Misconfigured(msg) => {
                tracing::error!("Server misconfiguration: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Server misconfiguration: {}", msg),
                )
            }
            ApiError::UpstreamFailure(msg) => {
                // Detail stays in the logs; the caller gets a generic line.
                tracing::error!("Upstream failure: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "Payment verification failed. Please contact support.".to_string(),
                )
            }
            ApiError::ContentBackend(msg) => {
                tracing::error!("Content backend error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Internal(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => ApiError::BadRequest(msg),
            CoreError::Config(msg) => ApiError::Misconfigured(msg),
            CoreError::UpstreamAuth(msg) | CoreError::UpstreamFetch(msg) => {
                ApiError::UpstreamFailure(msg)
            }
            CoreError::Content(msg) => ApiError::ContentBackend(msg),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}
