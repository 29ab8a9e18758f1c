use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

pub use super::repo_types::Roadmap;

pub async fn insert(db: &PgPool, user_id: Uuid, steps: &[String]) -> anyhow::Result<Roadmap> {
    let row = sqlx::query_as::<_, Roadmap>(
        r#"
        INSERT INTO roadmaps (id, user_id, steps)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, steps, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(steps)
    .fetch_one(db)
    .await
    .context("insert roadmap")?;
    Ok(row)
}

pub async fn latest_for_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<Roadmap>> {
    let row = sqlx::query_as::<_, Roadmap>(
        r#"
        SELECT id, user_id, steps, created_at
          FROM roadmaps
         WHERE user_id = $1
         ORDER BY created_at DESC, seq DESC
         LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("latest roadmap")?;
    Ok(row)
}

pub async fn list_for_user(
    db: &PgPool,
    user_id: Uuid,
    limit: i64,
    offset: i64,
) -> anyhow::Result<Vec<Roadmap>> {
    let rows = sqlx::query_as::<_, Roadmap>(
        r#"
        SELECT id, user_id, steps, created_at
          FROM roadmaps
         WHERE user_id = $1
         ORDER BY created_at DESC, seq DESC
         LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await
    .context("list roadmaps")?;
    Ok(rows)
}
