//! HTTP error mapping. Every failure answers `{"detail": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use eduflow_core::Error;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Engine(#[from] Error),

    /// Route exists but not for this agent (e.g. `chat` on the lesson planner).
    #[error("{0}")]
    NotFound(String),

    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Engine(err) => match err {
                Error::AgentNotFound(_) => StatusCode::NOT_FOUND,
                Error::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                Error::Generation { .. } => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Engine(Error::AgentNotFound(id)) => format!("Agent {} not found", id),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}
