use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One stored resume analysis (`user_data` table).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub page_count: i32,
    pub candidate_level: String,
    pub predicted_category: String,
    pub recommended_job: String,
    pub skills: Vec<String>,
    pub recommended_track: Option<String>,
    pub recommended_skills: Vec<String>,
    pub recommended_courses: Vec<String>,
    #[serde(skip_serializing, default)]
    pub resume_text: String,
    pub created_at: DateTime<Utc>,
}

/// Skill frequency across all stored analyses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct SkillCount {
    pub skill: String,
    pub count: i64,
}
