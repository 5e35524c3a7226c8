// src/store/scores.rs

use sqlx::PgPool;

use crate::models::score::{LeaderboardEntry, QuizScore};

/// Inserts a score row for a submitted attempt. Create-only.
pub async fn create(
    pool: &PgPool,
    user_id: i64,
    quiz_id: i64,
    score: i32,
    time_taken: &str,
) -> Result<QuizScore, sqlx::Error> {
    sqlx::query_as::<_, QuizScore>(
        r#"
        INSERT INTO quiz_scores (user_id, quiz_id, score, time_taken)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, quiz_id, score, time_taken, completed_at
        "#,
    )
    .bind(user_id)
    .bind(quiz_id)
    .bind(score)
    .bind(time_taken)
    .fetch_one(pool)
    .await
}

/// All scores across every quiz generated from the material, joined with
/// usernames and quiz levels. Ordering is applied by the caller via
/// `rank_leaderboard` so server and clients share one definition.
pub async fn leaderboard_for_material(
    pool: &PgPool,
    material_id: i64,
) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
    sqlx::query_as::<_, LeaderboardEntry>(
        r#"
        SELECT s.id, u.username, s.score, s.time_taken, s.completed_at, q.level
        FROM quiz_scores s
        JOIN users u ON s.user_id = u.id
        JOIN quizzes q ON s.quiz_id = q.id
        WHERE q.material_id = $1
        "#,
    )
    .bind(material_id)
    .fetch_all(pool)
    .await
}
