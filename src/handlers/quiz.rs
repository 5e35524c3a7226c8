// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::quiz::{GenerateQuizRequest, Level, QuizLevelQuery},
    quizgen::{extract::extract_text, synthesizer::synthesize},
    state::AppState,
    store,
};

const INVALID_LEVEL_MESSAGE: &str = "Valid level required (Beginner, Intermediate, or Advanced)";

/// Generates a new quiz for a study material at the requested level.
///
/// Always creates a new quiz row (never reuses an existing one), so
/// repeated requests produce fresh question sets. Extraction and synthesis
/// cannot fail (a degraded generative backend or an unreadable document
/// falls back to deterministic question banks), so the only visible errors
/// are an unknown material (404), a bad level (400), or a storage failure.
pub async fn generate_quiz(
    State(state): State<AppState>,
    Path(material_id): Path<i64>,
    Json(payload): Json<GenerateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let level = Level::parse(&payload.level)
        .ok_or_else(|| AppError::BadRequest(INVALID_LEVEL_MESSAGE.to_string()))?;

    let material = store::materials::get_by_id(&state.pool, material_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Study material not found".to_string()))?;

    tracing::info!(
        material_id,
        level = level.as_str(),
        title = %material.title,
        "generating quiz"
    );

    let text = extract_text(state.documents.as_ref(), &material.document_url).await;
    let questions = synthesize(state.ai.as_ref(), &text, level).await;

    let quiz = store::quizzes::create(&state.pool, material_id, level.as_str(), &questions)
        .await
        .map_err(|e| {
            tracing::error!(
                material_id,
                level = level.as_str(),
                "failed to persist generated quiz: {:?}",
                e
            );
            AppError::from(e)
        })?;

    tracing::info!(material_id, quiz_id = quiz.id, "quiz created");
    Ok((StatusCode::CREATED, Json(quiz)))
}

/// Returns the most recently generated quiz for a material and level,
/// or 404 if none has been generated yet. A client polling before
/// generation completes gets a clean "not yet generated" signal.
pub async fn get_latest_quiz(
    State(state): State<AppState>,
    Path(material_id): Path<i64>,
    Query(query): Query<QuizLevelQuery>,
) -> Result<impl IntoResponse, AppError> {
    let level = query.level.as_deref().unwrap_or("Beginner");
    let level = Level::parse(level)
        .ok_or_else(|| AppError::BadRequest(INVALID_LEVEL_MESSAGE.to_string()))?;

    store::materials::get_by_id(&state.pool, material_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Study material not found".to_string()))?;

    let quiz = store::quizzes::get_latest(&state.pool, material_id, level.as_str())
        .await?
        .ok_or_else(|| {
            AppError::NotFound("No quiz found for this material and level".to_string())
        })?;

    Ok(Json(quiz))
}

/// Retrieves a quiz by its identifier.
pub async fn get_quiz(
    State(state): State<AppState>,
    Path(quiz_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = store::quizzes::get_by_id(&state.pool, quiz_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

    Ok(Json(quiz))
}
