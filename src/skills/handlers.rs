use axum::{
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, instrument};

use super::dto::SkillGapRequest;
use super::services::{find_checklist, skill_gap, RoleChecklist, SkillGap, CHECKLISTS};
use crate::{
    auth::AuthUser,
    error::{AppError, AppResult},
    extract::AppJson,
    state::AppState,
};

pub fn skill_routes() -> Router<AppState> {
    Router::new()
        .route("/skill-gap", post(check_skill_gap))
        .route("/skill-gap/roles", get(list_roles))
}

#[instrument]
pub async fn list_roles(AuthUser(_user_id): AuthUser) -> Json<&'static [RoleChecklist]> {
    Json(CHECKLISTS)
}

#[instrument(skip(body))]
pub async fn check_skill_gap(
    AuthUser(user_id): AuthUser,
    AppJson(body): AppJson<SkillGapRequest>,
) -> AppResult<Json<SkillGap>> {
    let checklist = find_checklist(&body.role)
        .ok_or_else(|| AppError::not_found(format!("Unknown role: {}", body.role.trim())))?;
    let gap = skill_gap(checklist, body.skills.as_slice());
    debug!(%user_id, role = gap.role, coverage = gap.coverage_percent, "skill gap computed");
    Ok(Json(gap))
}
