use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;

/// Error returned by every handler; rendered as
/// `{"status": "error", "description": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(Value),

    #[error("bad request: {0}")]
    BadRequest(Value),

    #[error("internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn not_found(description: impl Into<Value>) -> Self {
        Self::NotFound(description.into())
    }

    pub fn bad_request(description: impl Into<Value>) -> Self {
        Self::BadRequest(description.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let description = match self {
            Self::NotFound(d) | Self::BadRequest(d) => d,
            Self::Internal(e) => {
                error!(error = %format!("{e:#}"), "unhandled storage failure");
                Value::from("internal server error")
            }
        };
        let body = Json(json!({ "status": "error", "description": description }));
        (status, body).into_response()
    }
}
