//! `AuthAdmin` extractor: pulls the bearer token from the Authorization
//! header and validates it.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use recruit_auth::Claims;
use recruit_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// An authenticated reviewer. Any valid token grants full access.
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub Claims);

impl std::ops::Deref for AuthAdmin {
    type Target = Claims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.authenticator.verify(token.trim())?;
        Ok(Self(claims))
    }
}
