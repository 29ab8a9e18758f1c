use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::dto::ProjectRequest;
use super::repo::{self, Project};
use crate::{
    auth::{AdminUser, AuthUser},
    error::{AppError, AppResult},
    extract::AppJson,
    pagination::Pagination,
    state::AppState,
};

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/projects", get(list_projects).post(create_project))
        .route(
            "/admin/projects/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
}

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/projects", get(browse_projects))
}

#[instrument(skip(state))]
pub async fn list_projects(
    State(state): State<AppState>,
    AdminUser(_admin_id): AdminUser,
    Query(p): Query<Pagination>,
) -> AppResult<Json<Vec<Project>>> {
    let (limit, offset) = p.clamped();
    Ok(Json(repo::list(&state.db, limit, offset).await?))
}

/// Read-only listing for logged-in users.
#[instrument(skip(state))]
pub async fn browse_projects(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Query(p): Query<Pagination>,
) -> AppResult<Json<Vec<Project>>> {
    let (limit, offset) = p.clamped();
    Ok(Json(repo::list(&state.db, limit, offset).await?))
}

#[instrument(skip(state, body))]
pub async fn create_project(
    State(state): State<AppState>,
    AdminUser(admin_id): AdminUser,
    AppJson(body): AppJson<ProjectRequest>,
) -> AppResult<(StatusCode, HeaderMap, Json<Project>)> {
    let fields = body.validate()?;
    let project = repo::insert(&state.db, &fields).await?;
    info!(%admin_id, project_id = %project.id, "project created");

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/api/v1/admin/projects/{}", project.id)) {
        headers.insert(header::LOCATION, location);
    }
    Ok((StatusCode::CREATED, headers, Json(project)))
}

#[instrument(skip(state))]
pub async fn get_project(
    State(state): State<AppState>,
    AdminUser(_admin_id): AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Project>> {
    repo::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Project not found"))
}

#[instrument(skip(state, body))]
pub async fn update_project(
    State(state): State<AppState>,
    AdminUser(admin_id): AdminUser,
    Path(id): Path<Uuid>,
    AppJson(body): AppJson<ProjectRequest>,
) -> AppResult<Json<Project>> {
    let fields = body.validate()?;
    let project = repo::update(&state.db, id, &fields)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found"))?;
    info!(%admin_id, project_id = %id, "project updated");
    Ok(Json(project))
}

#[instrument(skip(state))]
pub async fn delete_project(
    State(state): State<AppState>,
    AdminUser(admin_id): AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if !repo::delete(&state.db, id).await? {
        return Err(AppError::not_found("Project not found"));
    }
    info!(%admin_id, project_id = %id, "project deleted");
    Ok(StatusCode::NO_CONTENT)
}
