//! Extract the application id from the `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Numeric application id. A segment that is not an integer cannot name a row,
/// so it is rejected as not found rather than as a bad request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApplicationId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ApplicationId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        raw.trim()
            .parse::<i64>()
            .map(ApplicationId)
            .map_err(|_| AppError::NotFound("Application not found".into()))
    }
}
