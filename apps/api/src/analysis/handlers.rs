//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::admin::{authorize, count_skills, rows_to_csv};
use crate::analysis::pipeline::{analyze_resume, AnalysisResponse, ResumeUpload};
use crate::analysis::repository::{all_skill_lists, get_analysis, list_analyses};
use crate::errors::AppError;
use crate::jobs::{search_for_analysis, JobSearchOutcome, JobSearchRequest};
use crate::llm_client::prompts::{MATCH_PROMPT, SUMMARY_PROMPT};
use crate::models::analysis::{AnalysisRow, SkillCount};
use crate::recommendation::classifier::DEFAULT_COURSES;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub analysis_id: Uuid,
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub analysis_id: Uuid,
    pub report: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyses
///
/// Multipart form: `file` (the PDF resume) and optional `course_count`.
pub async fn handle_create_analysis(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<AnalysisResponse>), AppError> {
    let mut upload: Option<ResumeUpload> = None;
    let mut course_count = DEFAULT_COURSES as i64;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("could not read file: {e}")))?;
                upload = Some(ResumeUpload { file_name, bytes });
            }
            "course_count" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("could not read course_count: {e}")))?;
                course_count = raw.trim().parse().map_err(|_| {
                    AppError::Validation(format!("course_count must be an integer, got {raw:?}"))
                })?;
            }
            _ => {}
        }
    }

    let upload = upload.ok_or_else(|| AppError::Validation("missing `file` field".to_string()))?;
    let response = analyze_resume(&state, upload, course_count).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisRow>, AppError> {
    Ok(Json(load_analysis(&state, id).await?))
}

/// POST /api/v1/analyses/:id/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SummaryResponse>, AppError> {
    let row = load_analysis(&state, id).await?;
    let summary = state.llm.generate(&[SUMMARY_PROMPT, &row.resume_text]).await?;
    Ok(Json(SummaryResponse {
        analysis_id: id,
        summary,
    }))
}

/// POST /api/v1/analyses/:id/match
///
/// Evaluates the stored resume against a job description.
pub async fn handle_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let row = load_analysis(&state, id).await?;
    let report = state
        .llm
        .generate(&[MATCH_PROMPT, &row.resume_text, &request.job_description])
        .await?;
    Ok(Json(MatchResponse {
        analysis_id: id,
        report,
    }))
}

/// POST /api/v1/analyses/:id/jobs
///
/// Searches openings near the candidate. Answers `country_required` when no
/// country can be inferred; the caller then retries with `country` set.
pub async fn handle_jobs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<JobSearchRequest>,
) -> Result<Json<JobSearchOutcome>, AppError> {
    let row = load_analysis(&state, id).await?;
    let outcome = search_for_analysis(
        &state.llm,
        state.job_board.as_deref(),
        &row.resume_text,
        &request,
        &row.recommended_job,
    )
    .await?;
    Ok(Json(outcome))
}

/// GET /api/v1/admin/analyses
pub async fn handle_admin_list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<AnalysisRow>>, AppError> {
    authorize(&headers, state.config.admin_token.as_deref())?;
    Ok(Json(list_analyses(&state.db).await?))
}

/// GET /api/v1/admin/skills
pub async fn handle_admin_skills(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<SkillCount>>, AppError> {
    authorize(&headers, state.config.admin_token.as_deref())?;
    let lists = all_skill_lists(&state.db).await?;
    Ok(Json(count_skills(&lists)))
}

/// GET /api/v1/admin/analyses/export
pub async fn handle_admin_export(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    authorize(&headers, state.config.admin_token.as_deref())?;
    let rows = list_analyses(&state.db).await?;
    info!("Exporting {} analyses as CSV", rows.len());
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"User_Data.csv\"",
            ),
        ],
        rows_to_csv(&rows),
    ))
}

async fn load_analysis(state: &AppState, id: Uuid) -> Result<AnalysisRow, AppError> {
    get_analysis(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("analysis {id} not found")))
}
