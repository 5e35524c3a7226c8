// src/handlers/leaderboard.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::PgPool;

use crate::{error::AppError, models::score::rank_leaderboard, store};

/// Leaderboard across every quiz generated from a material.
///
/// Entries are ordered by score descending with faster elapsed time
/// breaking ties. An unknown material yields an empty list.
pub async fn material_leaderboard(
    State(pool): State<PgPool>,
    Path(material_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut entries = store::scores::leaderboard_for_material(&pool, material_id)
        .await
        .map_err(|e| {
            tracing::error!(material_id, "failed to fetch leaderboard: {:?}", e);
            AppError::from(e)
        })?;

    rank_leaderboard(&mut entries);

    Ok(Json(entries))
}
