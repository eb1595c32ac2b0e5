use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// Task record in the database. Every task has exactly one owner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub comment: Option<String>,
    pub done: bool,
    pub owner_id: i64,
    pub created_at: OffsetDateTime,
}

// Every scoped query below predicates on both the task id and the owner id
// in one explicit AND. A missing row and a row owned by someone else are
// indistinguishable to the caller.

pub async fn create(
    db: &PgPool,
    owner_id: i64,
    name: &str,
    comment: Option<&str>,
    done: bool,
) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (name, comment, done, owner_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, comment, done, owner_id, created_at
        "#,
    )
    .bind(name)
    .bind(comment)
    .bind(done)
    .bind(owner_id)
    .fetch_one(db)
    .await
}

pub async fn list_by_owner(
    db: &PgPool,
    owner_id: i64,
    skip: i64,
    limit: i64,
) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, name, comment, done, owner_id, created_at
        FROM tasks
        WHERE owner_id = $1
        ORDER BY id
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(owner_id)
    .bind(limit)
    .bind(skip)
    .fetch_all(db)
    .await
}

pub async fn get_by_owner(
    db: &PgPool,
    owner_id: i64,
    task_id: i64,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, name, comment, done, owner_id, created_at
        FROM tasks
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(task_id)
    .bind(owner_id)
    .fetch_optional(db)
    .await
}

pub async fn update_by_owner(
    db: &PgPool,
    owner_id: i64,
    task_id: i64,
    name: &str,
    comment: Option<&str>,
    done: bool,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET name = $3, comment = $4, done = $5
        WHERE id = $1 AND owner_id = $2
        RETURNING id, name, comment, done, owner_id, created_at
        "#,
    )
    .bind(task_id)
    .bind(owner_id)
    .bind(name)
    .bind(comment)
    .bind(done)
    .fetch_optional(db)
    .await
}

/// Returns true if a row was deleted.
pub async fn delete_by_owner(
    db: &PgPool,
    owner_id: i64,
    task_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM tasks
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(task_id)
    .bind(owner_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}
