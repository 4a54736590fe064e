//! Recruit handlers: public submission and the token-gated dashboard CRUD.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use recruit_entity::recruit::{NewRecruit, Recruit, RecruitPatch};

use crate::error::ApiError;
use crate::extractors::{AuthAdmin, RecruitId, ValidatedJson};
use crate::state::AppState;

/// POST /recruits
pub async fn create_recruit(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewRecruit>,
) -> Result<(StatusCode, Json<Recruit>), ApiError> {
    let recruit = state.recruit_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(recruit)))
}

/// GET /recruits
pub async fn list_recruits(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> Result<Json<Vec<Recruit>>, ApiError> {
    Ok(Json(state.recruit_service.find_all().await?))
}

/// GET /recruits/{id}
pub async fn get_recruit(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    RecruitId(id): RecruitId,
) -> Result<Json<Recruit>, ApiError> {
    Ok(Json(state.recruit_service.find_one(id).await?))
}

/// PATCH /recruits/{id}
pub async fn update_recruit(
    State(state): State<AppState>,
    admin: AuthAdmin,
    RecruitId(id): RecruitId,
    ValidatedJson(patch): ValidatedJson<RecruitPatch>,
) -> Result<Json<Recruit>, ApiError> {
    tracing::debug!(admin_id = %admin.admin_id(), recruit_id = id, "Updating recruit");
    Ok(Json(state.recruit_service.update(id, patch).await?))
}

/// DELETE /recruits/{id}
pub async fn delete_recruit(
    State(state): State<AppState>,
    admin: AuthAdmin,
    RecruitId(id): RecruitId,
) -> Result<StatusCode, ApiError> {
    tracing::debug!(admin_id = %admin.admin_id(), recruit_id = id, "Deleting recruit");
    state.recruit_service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
