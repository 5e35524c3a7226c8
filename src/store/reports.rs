// src/store/reports.rs

use sqlx::PgPool;

use crate::models::report::ReportScoreRow;

/// All of a user's score rows with the full content hierarchy resolved:
/// quiz -> material -> subchapter -> chapter -> subject.
pub async fn score_rows_for_user(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<ReportScoreRow>, sqlx::Error> {
    sqlx::query_as::<_, ReportScoreRow>(
        r#"
        SELECT s.id, s.score, s.time_taken, s.completed_at, s.quiz_id,
               q.level, q.material_id, m.title AS material_title,
               m.subchapter_id, sc.name AS subchapter_name,
               sc.chapter_id, c.name AS chapter_name,
               c.subject_id, sub.name AS subject_name
        FROM quiz_scores s
        JOIN quizzes q ON s.quiz_id = q.id
        JOIN study_materials m ON q.material_id = m.id
        JOIN subchapters sc ON m.subchapter_id = sc.id
        JOIN chapters c ON sc.chapter_id = c.id
        JOIN subjects sub ON c.subject_id = sub.id
        WHERE s.user_id = $1
        ORDER BY s.completed_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
