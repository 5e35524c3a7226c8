// src/store/quizzes.rs

use sqlx::PgPool;
use sqlx::types::Json;

use crate::models::quiz::{Quiz, QuizQuestion};

/// Inserts a new quiz row. Always creates: two concurrent generations for
/// the same (material, level) both insert, by design — `get_latest` is the
/// operation that picks a winner.
pub async fn create(
    pool: &PgPool,
    material_id: i64,
    level: &str,
    questions: &[QuizQuestion],
) -> Result<Quiz, sqlx::Error> {
    sqlx::query_as::<_, Quiz>(
        r#"
        INSERT INTO quizzes (material_id, level, questions)
        VALUES ($1, $2, $3)
        RETURNING id, material_id, level, questions, created_at
        "#,
    )
    .bind(material_id)
    .bind(level)
    .bind(Json(questions))
    .fetch_one(pool)
    .await
}

/// Returns the most recently created quiz for a (material, level) pair,
/// or None if none has been generated yet.
pub async fn get_latest(
    pool: &PgPool,
    material_id: i64,
    level: &str,
) -> Result<Option<Quiz>, sqlx::Error> {
    sqlx::query_as::<_, Quiz>(
        r#"
        SELECT id, material_id, level, questions, created_at
        FROM quizzes
        WHERE material_id = $1 AND level = $2
        ORDER BY created_at DESC, id DESC
        LIMIT 1
        "#,
    )
    .bind(material_id)
    .bind(level)
    .fetch_optional(pool)
    .await
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<Quiz>, sqlx::Error> {
    sqlx::query_as::<_, Quiz>(
        r#"
        SELECT id, material_id, level, questions, created_at
        FROM quizzes
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
