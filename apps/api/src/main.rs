mod analysis;
mod config;
mod db;
mod errors;
mod inference;
mod jobs;
mod llm_client;
mod models;
mod recommendation;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::inference::tfidf::TfidfClassifier;
use crate::inference::{TextClassifier, CATEGORY_MODEL_FILE, JOB_MODEL_FILE};
use crate::jobs::adzuna::{AdzunaClient, JobBoard};
use crate::llm_client::cache::{ResponseCache, DEFAULT_TTL_SECS};
use crate::llm_client::LlmClient;
use crate::recommendation::tracks::TrackTable;
use crate::resume::archive::ResumeArchive;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    // Initialize the LLM client, cached through Redis when configured
    let cache = match &config.redis_url {
        Some(url) => {
            let redis = redis::Client::open(url.as_str())?;
            info!("Redis response cache enabled");
            let cache = ResponseCache::new(redis, DEFAULT_TTL_SECS);
            Some(cache)
        }
        None => {
            warn!("REDIS_URL not set; LLM responses will not be cached");
            None
        }
    };
    let llm = LlmClient::new(config.gemini_api_key.clone(), cache)?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Load the pretrained classifiers
    let category_model = load_model(&config, CATEGORY_MODEL_FILE)?;
    let job_model = load_model(&config, JOB_MODEL_FILE)?;

    // Job board (optional)
    let job_board: Option<Arc<dyn JobBoard>> = match &config.adzuna {
        Some(credentials) => {
            info!("Adzuna job search enabled");
            Some(Arc::new(AdzunaClient::new(credentials.clone())?))
        }
        None => {
            warn!("Adzuna credentials not set; job search is disabled");
            None
        }
    };

    // Resume archive on S3 / MinIO (optional)
    let archive = match &config.s3 {
        Some(s3) => {
            info!("Archiving resumes to bucket {}", s3.bucket);
            Some(ResumeArchive::connect(s3).await)
        }
        None => None,
    };

    let tracks = Arc::new(TrackTable::builtin());
    info!("Loaded {} career tracks", tracks.tracks().len());

    // Build app state
    let state = AppState {
        db,
        llm,
        config: config.clone(),
        tracks,
        category_model,
        job_model,
        job_board,
        archive,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_model(config: &Config, file: &str) -> Result<Arc<dyn TextClassifier>> {
    let path = config.model_dir.join(file);
    let model = TfidfClassifier::load(&path)
        .with_context(|| format!("failed to load classifier from {}", path.display()))?;
    Ok(Arc::new(model))
}
