use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use super::dto::ProfileFields;
pub use super::repo_types::Profile;

pub async fn find_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
    let row = sqlx::query_as::<_, Profile>(
        r#"
        SELECT user_id, career_goal, current_level, interests, time_per_week, updated_at
          FROM profiles
         WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("find profile")?;
    Ok(row)
}

/// Inserts the profile or replaces the existing one for this user.
pub async fn upsert(db: &PgPool, user_id: Uuid, fields: &ProfileFields) -> anyhow::Result<Profile> {
    let row = sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO profiles (user_id, career_goal, current_level, interests, time_per_week)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (user_id) DO UPDATE
           SET career_goal   = EXCLUDED.career_goal,
               current_level = EXCLUDED.current_level,
               interests     = EXCLUDED.interests,
               time_per_week = EXCLUDED.time_per_week,
               updated_at    = now()
        RETURNING user_id, career_goal, current_level, interests, time_per_week, updated_at
        "#,
    )
    .bind(user_id)
    .bind(&fields.career_goal)
    .bind(&fields.current_level)
    .bind(&fields.interests)
    .bind(fields.time_per_week)
    .fetch_one(db)
    .await
    .context("upsert profile")?;
    Ok(row)
}
