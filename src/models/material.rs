// src/models/material.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'study_materials' table in the database.
///
/// Materials are owned by the content-management side of the application;
/// the quiz pipeline only reads them to locate the stored document and the
/// owning subchapter.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyMaterial {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,

    /// Storage-assigned name of the uploaded document, not the
    /// user-supplied filename.
    pub document_url: String,

    pub file_type: String,

    /// Size in bytes of the stored document.
    pub file_size: i64,

    pub subchapter_id: i64,
    pub uploaded_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
