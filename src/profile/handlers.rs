use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use super::dto::ProfileRequest;
use super::repo::{self, Profile};
use crate::{
    auth::AuthUser,
    error::{AppError, AppResult},
    extract::AppJson,
    state::AppState,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(save_profile))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Profile>> {
    repo::find_by_user(&state.db, user_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Profile not found"))
}

#[instrument(skip(state, body))]
pub async fn save_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppJson(body): AppJson<ProfileRequest>,
) -> AppResult<Json<Profile>> {
    let fields = body.validate()?;
    let profile = repo::upsert(&state.db, user_id, &fields).await?;
    info!(%user_id, "profile saved");
    Ok(Json(profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{register_user, send};
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::PgPool;

    #[sqlx::test(migrations = "./migrations")]
    async fn saving_twice_replaces_the_profile(pool: PgPool) {
        let state = AppState::with_pool(pool.clone());
        let (access, _, _) = register_user(&state, "asha@example.com").await;

        let (status, body) = send(&state, "GET", "/api/v1/profile", Some(&access), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Profile not found");

        for (goal, hours) in [("Data Scientist", 10), ("Web Developer", 3)] {
            let (status, _) = send(
                &state,
                "PUT",
                "/api/v1/profile",
                Some(&access),
                Some(json!({
                    "career_goal": goal,
                    "current_level": "beginner",
                    "interests": "building things",
                    "time_per_week": hours,
                })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = send(&state, "GET", "/api/v1/profile", Some(&access), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["career_goal"], "Web Developer");
        assert_eq!(body["time_per_week"], 3);

        let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profiles")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }
}
