use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

pub use super::repo_types::{Project, ProjectFields};

pub async fn list(db: &PgPool, limit: i64, offset: i64) -> anyhow::Result<Vec<Project>> {
    let rows = sqlx::query_as::<_, Project>(
        r#"
        SELECT id, title, description, link, created_at, updated_at
          FROM projects
         ORDER BY created_at DESC, seq DESC
         LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await
    .context("list projects")?;
    Ok(rows)
}

pub async fn get(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Project>> {
    let row = sqlx::query_as::<_, Project>(
        r#"
        SELECT id, title, description, link, created_at, updated_at
          FROM projects
         WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
    .context("get project")?;
    Ok(row)
}

pub async fn insert(db: &PgPool, fields: &ProjectFields) -> anyhow::Result<Project> {
    let row = sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects (id, title, description, link)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, description, link, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(fields.link.as_deref())
    .fetch_one(db)
    .await
    .context("insert project")?;
    Ok(row)
}

/// Returns `None` when no project has this id.
pub async fn update(db: &PgPool, id: Uuid, fields: &ProjectFields) -> anyhow::Result<Option<Project>> {
    let row = sqlx::query_as::<_, Project>(
        r#"
        UPDATE projects
           SET title = $2, description = $3, link = $4, updated_at = now()
         WHERE id = $1
        RETURNING id, title, description, link, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(fields.link.as_deref())
    .fetch_optional(db)
    .await
    .context("update project")?;
    Ok(row)
}

/// Returns whether a row was deleted.
pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
    let res = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(db)
        .await
        .context("delete project")?;
    Ok(res.rows_affected() > 0)
}
