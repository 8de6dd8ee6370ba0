//! Skill catalog handlers for the REST API.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use skillhub_types::skill::Skill;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /skills/{key} - Get a skill by key.
pub async fn get_skill(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<Skill>>, AppError> {
    let skill = state.skill_service.get_by_key(&key).await?;
    Ok(Json(ApiResponse::success(skill)))
}

/// GET /skills - List every skill.
pub async fn list_skills(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Skill>>>, AppError> {
    let skills = state.skill_service.list().await?;
    Ok(Json(ApiResponse::success(skills)))
}

/// POST /skills - Register a new skill.
///
/// A body that isn't a valid Skill document is rejected with 400 before the
/// service is called.
pub async fn create_skill(
    State(state): State<AppState>,
    body: Result<Json<Skill>, JsonRejection>,
) -> Result<Json<ApiResponse<Skill>>, AppError> {
    let Json(skill) = body?;
    let created = state.skill_service.create(skill).await?;
    Ok(Json(ApiResponse::success(created)))
}
