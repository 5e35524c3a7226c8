// src/store/recommendations.rs

use sqlx::PgPool;

use crate::models::recommendation::StudyRecommendation;

/// Inserts a recommendation tied to the subchapter owning the quizzed
/// material. Create-only.
pub async fn create(
    pool: &PgPool,
    user_id: i64,
    subchapter_id: i64,
    recommendation: &str,
) -> Result<StudyRecommendation, sqlx::Error> {
    sqlx::query_as::<_, StudyRecommendation>(
        r#"
        INSERT INTO study_recommendations (user_id, subchapter_id, recommendation)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, subchapter_id, recommendation, generated_at
        "#,
    )
    .bind(user_id)
    .bind(subchapter_id)
    .bind(recommendation)
    .fetch_one(pool)
    .await
}

pub async fn list_for_user(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<StudyRecommendation>, sqlx::Error> {
    sqlx::query_as::<_, StudyRecommendation>(
        r#"
        SELECT id, user_id, subchapter_id, recommendation, generated_at
        FROM study_recommendations
        WHERE user_id = $1
        ORDER BY generated_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
