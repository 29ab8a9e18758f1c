use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::RoadmapResponse;
use super::repo::{self, Roadmap};
use super::services::steps_for_profile;
use crate::{
    auth::AuthUser,
    error::{AppError, AppResult},
    pagination::Pagination,
    profile,
    state::AppState,
};

pub fn roadmap_routes() -> Router<AppState> {
    Router::new()
        .route("/roadmap", get(current_roadmap))
        .route("/roadmap/generate", post(generate_roadmap))
        .route("/roadmap/history", get(roadmap_history))
}

#[instrument(skip(state))]
pub async fn generate_roadmap(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<(StatusCode, Json<Roadmap>)> {
    let profile = profile::repo::find_by_user(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Complete your profile first"))?;

    let steps = steps_for_profile(&profile);
    let roadmap = repo::insert(&state.db, user_id, &steps).await?;
    info!(%user_id, roadmap_id = %roadmap.id, steps = roadmap.steps.len(), "roadmap generated");
    Ok((StatusCode::CREATED, Json(roadmap)))
}

#[instrument(skip(state))]
pub async fn current_roadmap(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<RoadmapResponse>> {
    let latest = repo::latest_for_user(&state.db, user_id).await?;
    Ok(Json(latest.into()))
}

#[instrument(skip(state))]
pub async fn roadmap_history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(p): Query<Pagination>,
) -> AppResult<Json<Vec<Roadmap>>> {
    let (limit, offset) = p.clamped();
    Ok(Json(repo::list_for_user(&state.db, user_id, limit, offset).await?))
}
