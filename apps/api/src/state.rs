use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::inference::TextClassifier;
use crate::jobs::adzuna::JobBoard;
use crate::llm_client::LlmClient;
use crate::recommendation::tracks::TrackTable;
use crate::resume::archive::ResumeArchive;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    pub config: Config,
    /// Built once at startup, read-only afterwards.
    pub tracks: Arc<TrackTable>,
    /// Predicts the resume category.
    pub category_model: Arc<dyn TextClassifier>,
    /// Predicts the best-suited job title.
    pub job_model: Arc<dyn TextClassifier>,
    /// None when job-search credentials are not configured.
    pub job_board: Option<Arc<dyn JobBoard>>,
    /// None when S3 is not configured; uploads are then not archived.
    pub archive: Option<ResumeArchive>,
}
