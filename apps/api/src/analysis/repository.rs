//! `user_data` persistence. Rows are inserted once and never updated.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::analysis::AnalysisRow;

/// Column values for one new analysis.
#[derive(Debug, Clone)]
pub struct NewAnalysis<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub mobile_number: &'a str,
    pub page_count: i32,
    pub candidate_level: &'a str,
    pub predicted_category: &'a str,
    pub recommended_job: &'a str,
    pub skills: &'a [String],
    pub recommended_track: Option<&'a str>,
    pub recommended_skills: &'a [String],
    pub recommended_courses: &'a [String],
    pub resume_text: &'a str,
}

pub async fn insert_analysis(pool: &PgPool, row: &NewAnalysis<'_>) -> Result<AnalysisRow, sqlx::Error> {
    sqlx::query_as::<_, AnalysisRow>(
        r#"
        INSERT INTO user_data (
            id, name, email, mobile_number, page_count, candidate_level,
            predicted_category, recommended_job, skills, recommended_track,
            recommended_skills, recommended_courses, resume_text
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(row.name)
    .bind(row.email)
    .bind(row.mobile_number)
    .bind(row.page_count)
    .bind(row.candidate_level)
    .bind(row.predicted_category)
    .bind(row.recommended_job)
    .bind(row.skills)
    .bind(row.recommended_track)
    .bind(row.recommended_skills)
    .bind(row.recommended_courses)
    .bind(row.resume_text)
    .fetch_one(pool)
    .await
}

pub async fn get_analysis(pool: &PgPool, id: Uuid) -> Result<Option<AnalysisRow>, sqlx::Error> {
    sqlx::query_as::<_, AnalysisRow>("SELECT * FROM user_data WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// All analyses, newest first.
pub async fn list_analyses(pool: &PgPool) -> Result<Vec<AnalysisRow>, sqlx::Error> {
    sqlx::query_as::<_, AnalysisRow>("SELECT * FROM user_data ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

/// The extracted skill list of every analysis.
pub async fn all_skill_lists(pool: &PgPool) -> Result<Vec<Vec<String>>, sqlx::Error> {
    sqlx::query_scalar::<_, Vec<String>>("SELECT skills FROM user_data")
        .fetch_all(pool)
        .await
}
