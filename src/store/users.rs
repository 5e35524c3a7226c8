// src/store/users.rs

use sqlx::PgPool;

use crate::models::user::User;

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password, email, is_teacher, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password, email, is_teacher, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
    email: Option<&str>,
    is_teacher: bool,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, password, email, is_teacher)
        VALUES ($1, $2, $3, $4)
        RETURNING id, username, password, email, is_teacher, created_at
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .bind(email)
    .bind(is_teacher)
    .fetch_one(pool)
    .await
}
