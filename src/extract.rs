use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::ApiError;

/// Numeric `:id` route segment. Anything that is not a plain base-10 `i32`
/// is treated as an unmatched route.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| route_not_found())?;
        parse_id(&raw).map(EntityId).ok_or_else(route_not_found)
    }
}

fn parse_id(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn route_not_found() -> ApiError {
    ApiError::not_found("resource not found")
}

/// Field checks beyond what deserialization already enforces.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl From<FieldError> for ApiError {
    fn from(e: FieldError) -> Self {
        ApiError::bad_request(json!({ "field": e.field, "message": e.message }))
    }
}

/// JSON body parsed into a validation shape. The body is read as raw bytes,
/// so a missing or different `Content-Type` is not an error.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;
        let value: T = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::bad_request(format!("invalid request body: {e}")))?;
        value.validate()?;
        Ok(ValidJson(value))
    }
}
