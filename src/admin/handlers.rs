use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::dto::{AdminAuthResponse, AdminLoginRequest, AdminRegisterRequest, PublicAdmin};
use super::repo::Admin;
use super::services::{check_signup_key, normalize_username, validate_username};
use crate::{
    auth::{
        claims::Role,
        jwt::JwtKeys,
        password::{hash_password_blocking, verify_password_blocking},
        services::check_password_strength,
        AdminUser,
    },
    error::{is_unique_violation, AppError, AppResult},
    extract::AppJson,
    state::AppState,
};

pub fn admin_auth_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/register", post(register_admin))
        .route("/admin/login", post(login_admin))
        .route("/admin/me", get(get_admin_me))
}

#[instrument(skip(state, payload))]
pub async fn register_admin(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AdminRegisterRequest>,
) -> AppResult<(StatusCode, Json<AdminAuthResponse>)> {
    check_signup_key(state.config.admin_signup_key.as_deref(), &payload.signup_key)
        .inspect_err(|e| warn!(error = %e, "admin signup refused"))?;

    let username = normalize_username(&payload.username);
    validate_username(&username)?;
    check_password_strength(&payload.password)?;

    if Admin::find_by_username(&state.db, &username).await?.is_some() {
        return Err(AppError::conflict("Username already taken"));
    }

    let hash = hash_password_blocking(payload.password).await?;
    let admin = match Admin::create(&state.db, &username, &hash).await {
        Ok(a) => a,
        Err(e) if is_unique_violation(&e) => {
            return Err(AppError::conflict("Username already taken"));
        }
        Err(e) => return Err(e.into()),
    };

    let tokens = JwtKeys::from_ref(&state).issue_pair(admin.id, Role::Admin)?;
    info!(admin_id = %admin.id, username = %admin.username, "admin registered");

    Ok((
        StatusCode::CREATED,
        Json(AdminAuthResponse {
            tokens,
            admin: admin.into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login_admin(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AdminLoginRequest>,
) -> AppResult<Json<AdminAuthResponse>> {
    let username = normalize_username(&payload.username);
    if username.is_empty() || payload.password.is_empty() {
        return Err(AppError::bad_request("Username and password are required"));
    }

    let Some(admin) = Admin::find_by_username(&state.db, &username).await? else {
        warn!(username = %username, "admin login unknown username");
        return Err(AppError::unauthorized("Invalid credentials"));
    };

    if !verify_password_blocking(payload.password, admin.password_hash.clone()).await? {
        warn!(admin_id = %admin.id, "admin login invalid password");
        return Err(AppError::unauthorized("Invalid credentials"));
    }

    let tokens = JwtKeys::from_ref(&state).issue_pair(admin.id, Role::Admin)?;
    info!(admin_id = %admin.id, "admin logged in");

    Ok(Json(AdminAuthResponse {
        tokens,
        admin: admin.into(),
    }))
}

#[instrument(skip(state))]
pub async fn get_admin_me(
    State(state): State<AppState>,
    AdminUser(admin_id): AdminUser,
) -> AppResult<Json<PublicAdmin>> {
    let admin = Admin::find_by_id(&state.db, admin_id)
        .await?
        .ok_or_else(|| AppError::unauthorized("Admin not found"))?;
    Ok(Json(admin.into()))
}
