//! Resume analysis: orchestrates the full upload pipeline.
//!
//! Flow: validate upload → read PDF → archive → extract fields →
//!       classify category and job → recommend track → tips →
//!       candidate level → persist → return response.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::analysis::repository::{insert_analysis, NewAnalysis};
use crate::errors::AppError;
use crate::inference::clean_resume;
use crate::recommendation::classifier::{recommend, Recommendation};
use crate::resume::fields::{extract_fields, ResumeFields};
use crate::resume::level::CandidateLevel;
use crate::resume::pdf::{looks_like_pdf, read_pdf, PdfText};
use crate::resume::tips::{resume_tips, ResumeTip};
use crate::state::AppState;

/// The uploaded file as received from the multipart form.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub id: Uuid,
    pub fields: ResumeFields,
    pub candidate_level: CandidateLevel,
    pub predicted_category: String,
    pub recommended_job: String,
    pub recommendation: Recommendation,
    pub tips: Vec<ResumeTip>,
    /// Object key of the archived PDF, when archival is enabled and succeeded.
    pub archive_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Runs the analysis pipeline and persists one `user_data` row.
pub async fn analyze_resume(
    state: &AppState,
    upload: ResumeUpload,
    course_count: i64,
) -> Result<AnalysisResponse, AppError> {
    // Step 1: Validate and read the PDF
    let pdf = read_upload(&upload).await?;
    info!(
        "Read resume {:?}: {} pages, {} chars",
        upload.file_name,
        pdf.page_count,
        pdf.full_text.len()
    );

    let id = Uuid::new_v4();

    // Step 2: Archive the uploaded PDF (best effort)
    let archive_key = match &state.archive {
        Some(archive) => match archive.store(id, upload.bytes.clone()).await {
            Ok(key) => Some(key),
            Err(e) => {
                error!("Resume archival failed for {id}: {e}");
                None
            }
        },
        None => None,
    };

    // Step 3: Structured fields via the LLM
    let fields = extract_fields(&state.llm, &pdf.head_text, pdf.page_count).await;
    info!("Extracted {} skills for {id}", fields.skills.len());

    // Step 4: Pretrained classifiers on the cleaned full text
    let cleaned = clean_resume(&pdf.full_text);
    let predicted_category = state.category_model.predict(&cleaned);
    let recommended_job = state.job_model.predict(&cleaned);
    info!("Predicted category {predicted_category:?}, job {recommended_job:?}");

    // Step 5: Track and courses
    let recommendation = recommend(
        &fields.skills,
        state.tracks.tracks(),
        course_count,
        &mut rand::thread_rng(),
    );
    match recommendation.track {
        Some(track) => info!("Recommended track {track} for {id}"),
        None => info!("No track matched for {id}"),
    }

    // Step 6: Writing tips and level
    let tips = resume_tips(&pdf.full_text);
    let candidate_level = CandidateLevel::from_page_count(pdf.page_count);

    // Step 7: Persist
    let track = recommendation.track.map(|t| t.as_str());
    let row = insert_analysis(
        &state.db,
        &NewAnalysis {
            id,
            name: &fields.name,
            email: &fields.email,
            mobile_number: &fields.mobile_number,
            page_count: i32::try_from(pdf.page_count).unwrap_or(i32::MAX),
            candidate_level: candidate_level.as_str(),
            predicted_category: &predicted_category,
            recommended_job: &recommended_job,
            skills: &fields.skills,
            recommended_track: track,
            recommended_skills: &recommendation.recommended_skills,
            recommended_courses: &recommendation.selected_courses,
            resume_text: &pdf.full_text,
        },
    )
    .await?;
    info!("Stored analysis {id}");

    Ok(AnalysisResponse {
        id,
        fields,
        candidate_level,
        predicted_category,
        recommended_job,
        recommendation,
        tips,
        archive_key,
        created_at: row.created_at,
    })
}

/// Rejects non-PDF and text-less uploads, then extracts the text off the
/// async runtime.
async fn read_upload(upload: &ResumeUpload) -> Result<PdfText, AppError> {
    if upload.bytes.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".to_string()));
    }
    if !looks_like_pdf(upload.file_name.as_deref(), &upload.bytes) {
        return Err(AppError::Validation(
            "only PDF resumes are supported".to_string(),
        ));
    }

    let bytes = upload.bytes.clone();
    let pdf = tokio::task::spawn_blocking(move || read_pdf(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF reader task failed: {e}")))??;

    if pdf.full_text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "the PDF contains no extractable text".to_string(),
        ));
    }
    Ok(pdf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: Option<&str>, bytes: &'static [u8]) -> ResumeUpload {
        ResumeUpload {
            file_name: name.map(str::to_string),
            bytes: Bytes::from_static(bytes),
        }
    }

    #[tokio::test]
    async fn test_empty_upload_is_rejected() {
        let err = read_upload(&upload(Some("cv.pdf"), b"")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_non_pdf_upload_is_rejected() {
        let err = read_upload(&upload(Some("cv.docx"), b"PK\x03\x04"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_pdf_error() {
        let err = read_upload(&upload(Some("cv.pdf"), b"%PDF-1.4 garbage"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Pdf(_)));
    }
}
