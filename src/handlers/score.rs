// src/handlers/score.rs

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        quiz::{Level, is_passed},
        score::SubmitScoreRequest,
    },
    quizgen::recommend::study_recommendation,
    state::AppState,
    store,
    utils::jwt::Claims,
};

/// Submits a quiz attempt: persists the score and derives a personalized
/// study recommendation.
///
/// The score row is persisted first; recommendation generation and its
/// persistence are best-effort afterwards. A failure there is logged and
/// degraded, never rolled back into a failed submission.
pub async fn submit_score(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<SubmitScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let user_id = claims.sub.parse::<i64>().unwrap_or(0);

    let quiz = store::quizzes::get_by_id(&state.pool, payload.quiz_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

    let material = store::materials::get_by_id(&state.pool, quiz.material_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Study material not found".to_string()))?;

    let user = store::users::get_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let score = store::scores::create(
        &state.pool,
        user_id,
        payload.quiz_id,
        payload.score,
        &payload.time_taken,
    )
    .await
    .map_err(|e| {
        tracing::error!(
            quiz_id = payload.quiz_id,
            user_id,
            "failed to persist quiz score: {:?}",
            e
        );
        AppError::from(e)
    })?;

    // The client reports only the percentage, not per-question answers,
    // so the incorrect-question list sent to the coach prompt is empty.
    let incorrect_questions: Vec<String> = Vec::new();
    let recommendation = study_recommendation(
        state.ai.as_ref(),
        &user.username,
        &material.title,
        payload.score,
        &incorrect_questions,
    )
    .await;

    // The score is already persisted; losing the recommendation row must
    // not fail the submission.
    if let Err(e) =
        store::recommendations::create(&state.pool, user_id, material.subchapter_id, &recommendation)
            .await
    {
        tracing::error!(
            user_id,
            subchapter_id = material.subchapter_id,
            "failed to persist study recommendation: {:?}",
            e
        );
    }

    let level = Level::parse(&quiz.level).unwrap_or(Level::Beginner);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "score": score,
            "recommendation": recommendation,
            "passed": is_passed(level, payload.score),
        })),
    ))
}
