// src/models/recommendation.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'study_recommendations' table in the database.
///
/// One row is created as a side effect of each scored attempt, tied to the
/// subchapter that owns the quizzed material. Never mutated.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyRecommendation {
    pub id: i64,
    pub user_id: i64,
    pub subchapter_id: i64,
    pub recommendation: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
