use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    admin::repo::Admin,
    auth::{
        claims::Role,
        dto::{AuthResponse, LoginRequest, PublicUser, RefreshRequest, RegisterRequest, TokenPair},
        extractors::AuthUser,
        jwt::JwtKeys,
        password::{hash_password_blocking, verify_password_blocking},
        repo::User,
        services::{is_valid_email, normalize_email, validate_registration},
    },
    error::{is_unique_violation, AppError, AppResult},
    extract::AppJson,
    notify::notify_best_effort,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let (name, email) = validate_registration(&payload.name, &payload.email, &payload.password)
        .inspect_err(|e| warn!(error = %e, "registration rejected"))?;

    // Ensure email is not taken
    if User::find_by_email(&state.db, &email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Err(AppError::conflict("Email already registered"));
    }

    let hash = hash_password_blocking(payload.password).await?;

    let user = match User::create(&state.db, &name, &email, &hash).await {
        Ok(u) => u,
        Err(e) if is_unique_violation(&e) => {
            warn!(email = %email, "email registered concurrently");
            return Err(AppError::conflict("Email already registered"));
        }
        Err(e) => return Err(e.into()),
    };

    let tokens = JwtKeys::from_ref(&state).issue_pair(user.id, Role::User)?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    notify_best_effort(state.notifier.as_ref(), "New Signup", &user.email).await;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            tokens,
            user: user.into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = normalize_email(&payload.email);

    if email.is_empty() || payload.password.is_empty() {
        return Err(AppError::bad_request("Email and password are required"));
    }
    if !is_valid_email(&email) {
        warn!(email = %email, "invalid email");
        return Err(AppError::bad_request("Invalid email"));
    }

    let Some(user) = User::find_by_email(&state.db, &email).await? else {
        warn!(email = %email, "login unknown email");
        return Err(AppError::unauthorized("Invalid credentials"));
    };

    if !verify_password_blocking(payload.password, user.password_hash.clone()).await? {
        warn!(email = %email, user_id = %user.id, "login invalid password");
        return Err(AppError::unauthorized("Invalid credentials"));
    }

    let tokens = JwtKeys::from_ref(&state).issue_pair(user.id, Role::User)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    notify_best_effort(state.notifier.as_ref(), "Login", &user.email).await;

    Ok(Json(AuthResponse {
        tokens,
        user: user.into(),
    }))
}

/// Trades a refresh token for a new pair, for users and admins alike.
#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RefreshRequest>,
) -> AppResult<Json<TokenPair>> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify_refresh(&payload.refresh_token)
        .map_err(|e| AppError::unauthorized(e.to_string()))?;

    let exists = match claims.role {
        Role::User => User::find_by_id(&state.db, claims.sub).await?.is_some(),
        Role::Admin => Admin::find_by_id(&state.db, claims.sub).await?.is_some(),
    };
    if !exists {
        warn!(subject = %claims.sub, role = claims.role.as_str(), "refresh for unknown account");
        return Err(AppError::unauthorized("Account not found"));
    }

    Ok(Json(keys.issue_pair(claims.sub, claims.role)?))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<PublicUser>> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::unauthorized("User not found"))?;
    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{register_user, send};
    use serde_json::json;
    use sqlx::PgPool;
    use time::OffsetDateTime;
    use uuid::Uuid;

    #[test]
    fn public_user_hides_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Test".into(),
            email: "test@example.com".into(),
            password_hash: "$argon2id$secret".into(),
            role: "user".into(),
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&PublicUser::from(user)).unwrap();
        assert!(json.contains("test@example.com"));
        assert!(json.contains("\"role\":\"user\""));
        assert!(!json.contains("argon2"));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn duplicate_email_conflicts(pool: PgPool) {
        let state = AppState::with_pool(pool);
        register_user(&state, "asha@example.com").await;

        let (status, body) = send(
            &state,
            "POST",
            "/api/v1/auth/register",
            None,
            Some(json!({ "name": "Other", "email": " ASHA@example.com ", "password": "longenough" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "Email already registered");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn login_then_me(pool: PgPool) {
        let state = AppState::with_pool(pool);
        let (_, _, user_id) = register_user(&state, "asha@example.com").await;

        let (status, _) = send(
            &state,
            "POST",
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "asha@example.com", "password": "wrong-password" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(
            &state,
            "POST",
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "Asha@Example.com", "password": "longenough" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let access = body["access_token"].as_str().unwrap();

        let (status, body) = send(&state, "GET", "/api/v1/me", Some(access), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], user_id.to_string());
        assert!(body.get("password_hash").is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn refresh_rejects_deleted_account(pool: PgPool) {
        let state = AppState::with_pool(pool.clone());
        let (_, refresh, user_id) = register_user(&state, "asha@example.com").await;

        let (status, body) = send(
            &state,
            "POST",
            "/api/v1/auth/refresh",
            None,
            Some(json!({ "refresh_token": &refresh })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["access_token"].is_string());

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&pool)
            .await
            .unwrap();

        let (status, body) = send(
            &state,
            "POST",
            "/api/v1/auth/refresh",
            None,
            Some(json!({ "refresh_token": &refresh })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Account not found");
    }
}
