// src/handlers/report.rs

use axum::{Extension, Json, extract::State, response::IntoResponse};
use sqlx::PgPool;

use crate::{
    error::AppError, models::report::build_report, store, utils::jwt::Claims,
};

/// Progress report for the current student: total attempts, average score,
/// per-subject breakdown, raw score rows and past recommendations.
pub async fn student_report(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.sub.parse::<i64>().unwrap_or(0);

    let quiz_scores = store::reports::score_rows_for_user(&pool, user_id)
        .await
        .map_err(|e| {
            tracing::error!(user_id, "failed to fetch report rows: {:?}", e);
            AppError::from(e)
        })?;

    let recommendations = store::recommendations::list_for_user(&pool, user_id).await?;

    Ok(Json(build_report(quiz_scores, recommendations)))
}
