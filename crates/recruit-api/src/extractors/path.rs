//! Typed path parameter helpers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use recruit_core::error::AppError;

use crate::error::ApiError;

/// Numeric recruit ID taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecruitId(pub i64);

impl<S> FromRequestParts<S> for RecruitId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        raw.parse::<i64>().map(Self).map_err(|_| {
            ApiError(AppError::bad_request(
                "Validation failed (numeric string is expected)",
            ))
        })
    }
}
