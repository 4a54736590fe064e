//! Auth handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::{LoginRequest, LoginResponse};
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let token = state.authenticator.login(&req.email, &req.password).await?;
    Ok(Json(token.into()))
}
