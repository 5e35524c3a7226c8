// src/store/materials.rs

use sqlx::PgPool;

use crate::models::material::StudyMaterial;

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<StudyMaterial>, sqlx::Error> {
    sqlx::query_as::<_, StudyMaterial>(
        r#"
        SELECT id, title, description, document_url, file_type, file_size,
               subchapter_id, uploaded_by, created_at
        FROM study_materials
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
