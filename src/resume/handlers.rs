use axum::{routing::post, Json, Router};
use tracing::{debug, instrument};

use super::dto::ResumeScoreRequest;
use super::services::{score_resume, ResumeScore};
use crate::{
    auth::AuthUser,
    error::{AppError, AppResult},
    extract::AppJson,
    skills::services::find_checklist,
    state::AppState,
};

pub fn resume_routes() -> Router<AppState> {
    Router::new().route("/resume/score", post(score))
}

#[instrument(skip(body))]
pub async fn score(
    AuthUser(user_id): AuthUser,
    AppJson(body): AppJson<ResumeScoreRequest>,
) -> AppResult<Json<ResumeScore>> {
    if body.resume_text.trim().is_empty() {
        return Err(AppError::bad_request("resume_text is required"));
    }

    let checklist = match body.role.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
        Some(role) => Some(
            find_checklist(role).ok_or_else(|| AppError::not_found(format!("Unknown role: {role}")))?,
        ),
        None => None,
    };

    let result = score_resume(&body.resume_text, checklist);
    debug!(%user_id, score = result.score, "resume scored");
    Ok(Json(result))
}
